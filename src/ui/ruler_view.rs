//! Terminal backend for the column ruler.
//!
//! Adapts the ruler's pixel-space draw calls onto two terminal rows:
//! labels and dots land on the first, the vertical tick lines under the
//! labels become `|` marks on the second. One terminal cell corresponds
//! to one glyph advance of the current font, so a viewport of `w` cells
//! spans `w * char_width` ruler pixels and the ruler always lays out
//! exactly `w` columns.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::ruler::{Canvas, Ruler};

/// A [`Canvas`] over two rows of terminal cells.
///
/// Text drawn at a baseline within the first line lands on the label
/// row; vertical lines dropping below the baseline land on the tick
/// row. Later draws overwrite earlier ones in the same cell, mirroring
/// how overlapping glyphs paint over each other in pixel backends.
pub struct CellCanvas {
    char_width: u32,
    labels: Vec<char>,
    ticks: Vec<char>,
}

impl CellCanvas {
    pub fn new(char_width: u32, width_cells: usize) -> Self {
        Self {
            char_width,
            labels: vec![' '; width_cells],
            ticks: vec![' '; width_cells],
        }
    }

    pub fn label_row(&self) -> String {
        self.labels.iter().collect()
    }

    pub fn tick_row(&self) -> String {
        self.ticks.iter().collect()
    }

    fn cell(&self, x: u32) -> Option<usize> {
        if self.char_width == 0 {
            return None;
        }
        let col = (x / self.char_width) as usize;
        (col < self.labels.len()).then_some(col)
    }
}

impl Canvas for CellCanvas {
    fn draw_text(&mut self, x: u32, _y: u32, text: &str) {
        let Some(col) = self.cell(x) else {
            return;
        };
        for (i, ch) in text.chars().enumerate() {
            if let Some(slot) = self.labels.get_mut(col + i) {
                *slot = ch;
            }
        }
    }

    fn draw_line(&mut self, x1: u32, _y1: u32, _x2: u32, _y2: u32) {
        if let Some(col) = self.cell(x1) {
            self.ticks[col] = '|';
        }
    }
}

/// Render the ruler strip into `area`. `origin` is the buffer column
/// shown at the left edge of the text area, so a panned viewport keeps
/// the strip's numbers aligned with the text beneath it.
pub fn render_ruler(ruler: &Ruler, origin: u32, frame: &mut Frame, area: Rect) {
    let style = Style::default().bg(Color::Gray).fg(Color::Black);
    let metrics = ruler.font().metrics();

    if metrics.char_width == 0 {
        // Degenerate metrics: an empty strip, never a crash.
        frame.render_widget(Paragraph::new("").style(style), area);
        return;
    }

    let mut canvas = CellCanvas::new(metrics.char_width, area.width as usize);
    ruler.paint(origin, u32::from(area.width) * metrics.char_width, &mut canvas);

    let rows = vec![Line::raw(canvas.label_row()), Line::raw(canvas.tick_row())];
    frame.render_widget(Paragraph::new(rows).style(style), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontSpec;
    use crate::ruler;

    fn painted_rows(columns: usize, font: &FontSpec) -> (String, String) {
        let metrics = font.metrics();
        let mut canvas = CellCanvas::new(metrics.char_width, columns);
        #[allow(clippy::cast_possible_truncation)]
        ruler::paint(metrics, 0, columns as u32 * metrics.char_width, &mut canvas);
        (canvas.label_row(), canvas.tick_row())
    }

    #[test]
    fn test_label_row_cadence() {
        let (labels, ticks) = painted_rows(22, &FontSpec::default());
        // Labels at 0 and 10; columns 5 and 15 blank; dots between. The
        // dot for column 11 overwrites the second digit of "10", the
        // cell analog of overlapping pixel glyphs.
        assert_eq!(labels, "0.... ....1.... ....2.");
        assert_eq!(ticks.chars().next(), Some('|'));
        assert_eq!(ticks.chars().nth(10), Some('|'));
        assert_eq!(ticks.chars().nth(5), Some(' '));
    }

    #[test]
    fn test_one_cell_per_column() {
        for size in [8u16, 24] {
            let (labels, _) = painted_rows(30, &FontSpec::new("Mono", size));
            assert_eq!(labels.chars().count(), 30);
            assert_eq!(labels.chars().next(), Some('0'));
            assert_eq!(labels.chars().nth(1), Some('.'));
        }
    }

    #[test]
    fn test_panned_strip_numbers_buffer_columns() {
        // Left edge at buffer column 121: "130" starts nine cells in,
        // "140" nineteen; column 125 stays blank.
        let metrics = FontSpec::default().metrics();
        let mut canvas = CellCanvas::new(metrics.char_width, 80);
        ruler::paint(metrics, 121, 80 * metrics.char_width, &mut canvas);

        let labels = canvas.label_row();
        assert_eq!(labels.chars().next(), Some('.'));
        assert_eq!(labels.chars().nth(4), Some(' '));
        assert_eq!(labels.chars().nth(9), Some('1'));
        assert_eq!(labels.chars().nth(19), Some('1'));
        assert_eq!(canvas.tick_row().chars().nth(9), Some('|'));
    }

    #[test]
    fn test_degenerate_font_paints_nothing() {
        let (labels, ticks) = painted_rows(30, &FontSpec::new("Mono", 0));
        assert!(labels.trim().is_empty());
        assert!(ticks.trim().is_empty());
    }
}
