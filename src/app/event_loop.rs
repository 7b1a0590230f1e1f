use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing::warn;

use crate::app::{App, Message, Model, ToastLevel, update};
use crate::config::save_prefs;
use crate::editor::TextBuffer;

/// Coalesces terminal resize events so a drag produces one relayout.
pub(super) struct ResizeDebouncer {
    delay_ms: u64,
    pending: Option<(u16, u16, u64)>,
}

impl ResizeDebouncer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub(super) const fn queue(&mut self, width: u16, height: u16, now_ms: u64) {
        self.pending = Some((width, height, now_ms));
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> Option<(u16, u16)> {
        let (width, height, queued_at) = self.pending?;
        if now_ms.saturating_sub(queued_at) >= self.delay_ms {
            self.pending = None;
            Some((width, height))
        } else {
            None
        }
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization fails or the event
    /// loop hits an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        // Read the initial file before touching the terminal.
        let (buffer, loaded_name) = match &self.file {
            Some(path) if path.exists() => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                (TextBuffer::from_text(&text), Some(path.clone()))
            }
            Some(path) => (TextBuffer::empty(), Some(path.clone())),
            None => (TextBuffer::empty(), None),
        };

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal; scrawl requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = self.initial_model(buffer, loaded_name, (size.width, size.height));

        execute!(stdout(), EnableMouseCapture)?;
        let result = Self::event_loop(&mut terminal, &mut model);
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        // A confirmed exit records the final window size alongside the
        // font preferences.
        if model.should_quit {
            model.prefs.window_width = model.size.0;
            model.prefs.window_height = model.size.1;
            if let Some(path) = &model.prefs_path {
                if let Err(err) = save_prefs(path, &model.prefs) {
                    warn!("failed to persist preferences: {err:#}");
                }
            }
        }

        result
    }

    /// Build the starting model from loaded preferences and CLI options.
    ///
    /// A `--font` override applies to the session only: it is not copied
    /// into `prefs`, so exiting does not clobber the saved font. The
    /// preferences change once the user applies a font via the dialog.
    pub(super) fn initial_model(
        &self,
        buffer: TextBuffer,
        file: Option<std::path::PathBuf>,
        size: (u16, u16),
    ) -> Model {
        let font = self
            .font_override
            .clone()
            .unwrap_or_else(|| self.prefs.font());
        let mut model = Model::new(buffer, font, size);
        model.prefs = self.prefs.clone();
        model.prefs_path.clone_from(&self.prefs_path);
        if let Some(path) = file {
            model.filename = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string());
            model.file_path = Some(path);
        }
        model
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let start = Instant::now();
        let mut resize_debouncer = ResizeDebouncer::new(100);
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            if let Some((width, height)) = resize_debouncer.take_ready(now_ms) {
                *model = update(std::mem::take(model), Message::Resize(width, height));
                needs_render = true;
            }

            let poll_ms = if needs_render {
                0
            } else if resize_debouncer.is_pending() {
                10
            } else {
                250
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                let event_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                if let Some(msg) =
                    Self::handle_event(&event::read()?, model, event_ms, &mut resize_debouncer)
                {
                    let side_msg = msg.clone();
                    *model = update(std::mem::take(model), msg);
                    Self::handle_message_side_effects(model, &side_msg);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                while event::poll(Duration::from_millis(0))? {
                    let drain_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                    if let Some(msg) = Self::handle_event(
                        &event::read()?,
                        model,
                        drain_ms,
                        &mut resize_debouncer,
                    ) {
                        let side_msg = msg.clone();
                        *model = update(std::mem::take(model), msg);
                        Self::handle_message_side_effects(model, &side_msg);
                        needs_render = true;
                    }
                }
            }

            // Cursor-change notifications from the text surface request
            // at most one repaint apiece.
            if model.ruler.take_repaint() {
                needs_render = true;
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}

impl Model {
    /// Convenience used by the effects layer when a save fails.
    pub(super) fn report_error(&mut self, message: String) {
        warn!("{message}");
        self.show_toast(ToastLevel::Error, message);
    }
}
