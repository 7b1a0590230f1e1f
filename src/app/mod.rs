//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Dialog, FontField, MenuCursor, Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::config::Prefs;
use crate::font::FontSpec;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file: Option<PathBuf>,
    font_override: Option<FontSpec>,
    prefs: Prefs,
    prefs_path: Option<PathBuf>,
}

impl App {
    /// Create a new application, editing an unnamed empty buffer.
    pub fn new() -> Self {
        Self {
            file: None,
            font_override: None,
            prefs: Prefs::default(),
            prefs_path: None,
        }
    }

    /// Load this file at startup (a missing file starts empty under
    /// that name).
    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        self.file = file;
        self
    }

    /// Override the configured font for this run.
    pub fn with_font(mut self, font: Option<FontSpec>) -> Self {
        self.font_override = font;
        self
    }

    /// Loaded preferences.
    pub fn with_prefs(mut self, prefs: Prefs) -> Self {
        self.prefs = prefs;
        self
    }

    /// Where preferences are persisted.
    pub fn with_prefs_path(mut self, path: Option<PathBuf>) -> Self {
        self.prefs_path = path;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
