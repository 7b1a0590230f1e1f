use std::fs;

use tracing::info;

use crate::app::{App, Message, Model, ToastLevel};
use crate::config::save_prefs;

impl App {
    /// Run the side effects a message implies, after the pure update.
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        if !matches!(msg, Message::DialogAccept) {
            return;
        }

        // Save As confirmed: write the buffer to the staged path.
        if let Some(path) = model.pending_save.take() {
            match fs::write(&path, model.buffer.text()) {
                Ok(()) => {
                    model.filename = path.file_name().map_or_else(
                        || path.display().to_string(),
                        |n| n.to_string_lossy().to_string(),
                    );
                    info!("saved {}", path.display());
                    model.file_path = Some(path);
                    model.buffer.mark_clean();
                    let name = model.filename.clone();
                    model.show_toast(ToastLevel::Info, format!("Saved {name}"));
                }
                Err(err) => {
                    model.report_error(format!("Save failed: {err}"));
                }
            }
        }

        // A font change marks the preferences dirty; write them now
        // rather than waiting for exit.
        if model.prefs_dirty {
            model.prefs_dirty = false;
            if let Some(path) = model.prefs_path.clone() {
                if let Err(err) = save_prefs(&path, &model.prefs) {
                    model.show_toast(ToastLevel::Warning, format!("Preferences not saved: {err}"));
                }
            }
        }
    }
}
