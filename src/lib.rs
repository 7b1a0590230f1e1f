// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference
    clippy::module_name_repetitions
)]

//! # Scrawl
//!
//! A minimal terminal text editor with a column ruler.
//!
//! One screen: a menu bar (File/Edit/Settings/Help), a ruler strip
//! marking text columns, the text area, and a status bar with the
//! cursor position. Font and window preferences persist between runs.
//!
//! ## Architecture
//!
//! Scrawl uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`editor`]: The rope-backed text surface
//! - [`ruler`]: Column ruler layout and painting
//! - [`font`]: Font selection and fixed-width metrics
//! - [`ui`]: Terminal UI components
//! - [`config`]: Persisted preferences

pub mod app;
pub mod config;
pub mod editor;
pub mod font;
pub mod ruler;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::TextBuffer;
    pub use crate::font::FontSpec;
    pub use crate::ruler::Ruler;
}
