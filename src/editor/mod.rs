//! The editable text surface.
//!
//! A rope-backed buffer with cursor tracking. The host app routes the
//! buffer's cursor-change notifications to the ruler.

mod buffer;

pub use buffer::{Cursor, Direction, TextBuffer};
