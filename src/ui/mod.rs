//! Terminal UI components.
//!
//! Screen layout, top to bottom: menu bar (1 row), column ruler
//! ([`RULER_ROWS`] rows: labels/dots plus tick marks), the text area,
//! and a status bar (1 row, preceded by a transient toast row when one
//! is active). Menus and dialogs render as overlays on top.

pub mod menu;
pub mod ruler_view;

mod overlays;
mod render;
mod status;

pub use render::render;

/// Height of the menu bar.
pub const MENU_HEIGHT: u16 = 1;

/// Terminal rows occupied by the ruler strip.
pub const RULER_ROWS: u16 = 2;

/// Row where the text area starts.
pub const TEXT_TOP: u16 = MENU_HEIGHT + RULER_ROWS;

/// Rows reserved below the text area (status bar).
pub const STATUS_HEIGHT: u16 = 1;

/// Usable text-area height for a terminal of `total` rows.
pub const fn text_area_height(total: u16) -> u16 {
    total.saturating_sub(TEXT_TOP + STATUS_HEIGHT)
}
