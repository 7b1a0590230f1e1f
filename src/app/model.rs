use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::Prefs;
use crate::editor::TextBuffer;
use crate::font::FontSpec;
use crate::ruler::Ruler;
use crate::ui::text_area_height;

/// Severity of a transient status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// Position inside the open menu: which menu, which item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuCursor {
    pub menu: usize,
    pub item: usize,
}

/// Which field of the font dialog is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontField {
    Family,
    Size,
}

/// The active modal dialog, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Path prompt used by Save.
    SaveAs { input: String },
    /// Family/size prompt for changing the font.
    Font {
        family: String,
        size: String,
        field: FontField,
    },
    About,
    /// "Exit without saving?" with a default of staying.
    ConfirmExit,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
pub struct Model {
    /// The text surface being edited.
    pub buffer: TextBuffer,
    /// Current font of the text surface.
    pub font: FontSpec,
    /// Column ruler; keeps its own font copy, synchronized on change.
    pub ruler: Ruler,
    /// First visible buffer line.
    pub scroll: usize,
    /// Line register for cut/copy/paste.
    pub clipboard: Option<String>,
    /// Open menu state.
    pub menu: Option<MenuCursor>,
    /// Active dialog.
    pub dialog: Option<Dialog>,
    /// Display name shown in the status bar ("Untitled" until saved).
    pub filename: String,
    /// Where Save writes, once known.
    pub file_path: Option<PathBuf>,
    /// Terminal size in cells.
    pub size: (u16, u16),
    pub should_quit: bool,
    /// Preferences as they will be persisted.
    pub prefs: Prefs,
    pub prefs_path: Option<PathBuf>,
    /// Save target staged by the Save As dialog for the effects layer.
    pub pending_save: Option<PathBuf>,
    /// Preferences changed and await persistence.
    pub prefs_dirty: bool,
    toast: Option<Toast>,
}

impl Model {
    pub fn new(buffer: TextBuffer, font: FontSpec, size: (u16, u16)) -> Self {
        Self {
            buffer,
            ruler: Ruler::new(font.clone()),
            font,
            scroll: 0,
            clipboard: None,
            menu: None,
            dialog: None,
            filename: "Untitled".to_string(),
            file_path: None,
            size,
            should_quit: false,
            prefs: Prefs::default(),
            prefs_path: None,
            pending_save: None,
            prefs_dirty: false,
            toast: None,
        }
    }

    /// Rows available to the text area. An active toast occupies one
    /// row of it.
    pub fn text_height(&self) -> usize {
        let rows = text_area_height(self.size.1) as usize;
        rows.saturating_sub(usize::from(self.active_toast().is_some()))
    }

    /// Apply a new font to the text surface and the ruler in one step,
    /// so the two never disagree across a render.
    pub fn set_font(&mut self, font: FontSpec) {
        self.ruler.set_font(font.clone());
        self.prefs.set_font(&font);
        self.font = font;
        self.prefs_dirty = true;
    }

    /// Scroll so the cursor line is inside the text area.
    pub fn follow_cursor(&mut self) {
        let line = self.buffer.cursor().line;
        let height = self.text_height().max(1);
        if line < self.scroll {
            self.scroll = line;
        } else if line >= self.scroll + height {
            self.scroll = line + 1 - height;
        }
    }

    pub fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(3),
        });
        // The toast row shrinks the text area; a cursor on the bottom
        // row would otherwise sit hidden under it.
        self.follow_cursor();
    }

    /// Active toast message and level, if not yet expired.
    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|t| (t.message.as_str(), t.level))
    }

    /// Drop an expired toast. Returns whether one was removed.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
            true
        } else {
            false
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(TextBuffer::empty(), FontSpec::default(), (80, 24))
    }
}
