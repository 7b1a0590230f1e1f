//! Column ruler: a horizontal strip above the text area that marks
//! character columns of the current font.
//!
//! Layout is computed in pixel space from [`FontMetrics`] and drawn
//! through the [`Canvas`] trait, keeping the marking rules independent
//! of any particular backend. Every fifth column gets a numeric label
//! with a short vertical tick under it, except that labels whose value
//! ends in 5 are skipped entirely, so numbers appear only at multiples
//! of ten and the strip never gets crowded at small sizes. All other
//! columns get a dot.
//!
//! The ruler does not repaint itself. The owner reports cursor movement
//! with [`Ruler::notify_cursor_moved`] and drains the resulting request
//! with [`Ruler::take_repaint`], so a burst of movements coalesces into
//! a single repaint.

use crate::font::{FontMetrics, FontSpec};

/// How far a tick line extends below the label baseline, in pixels.
pub const TICK_DROP: u32 = 10;

/// Drawing surface the ruler paints onto.
///
/// Coordinates are pixels with the origin at the strip's top-left.
/// `draw_text` places `text` with its baseline at `y`.
pub trait Canvas {
    fn draw_text(&mut self, x: u32, y: u32, text: &str);
    fn draw_line(&mut self, x1: u32, y1: u32, x2: u32, y2: u32);
}

/// One mark in the ruler's layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// A numeric label with a tick line under it.
    Label { col: u32, text: String },
    /// A plain dot.
    Dot { col: u32 },
}

impl Tick {
    pub const fn col(&self) -> u32 {
        match self {
            Self::Label { col, .. } | Self::Dot { col } => *col,
        }
    }
}

/// Number of whole character columns that fit in `visible_width` pixels.
pub const fn column_count(metrics: FontMetrics, visible_width: u32) -> u32 {
    if metrics.char_width == 0 {
        0
    } else {
        visible_width / metrics.char_width
    }
}

/// Layout for a strip of `columns` columns: one [`Tick`] per column,
/// in ascending order, except columns whose label would end in 5,
/// which get no mark at all.
pub fn ticks(columns: u32) -> Vec<Tick> {
    ticks_from(0, columns)
}

/// Layout for a window of `columns` columns whose left edge sits at
/// absolute column `origin`. Marking rules follow the absolute column,
/// so a horizontally panned strip keeps its numbering.
pub fn ticks_from(origin: u32, columns: u32) -> Vec<Tick> {
    let mut marks = Vec::with_capacity(columns as usize);
    for col in origin..origin.saturating_add(columns) {
        if col % 5 == 0 {
            let text = (col / 5 * 5).to_string();
            if !text.ends_with('5') {
                marks.push(Tick::Label { col, text });
            }
        } else {
            marks.push(Tick::Dot { col });
        }
    }
    marks
}

/// Paint a strip `visible_width` pixels wide onto `canvas`, starting at
/// absolute column `origin`.
///
/// Labels and dots sit on the baseline at `line_height`; each label's
/// tick line drops [`TICK_DROP`] pixels below it. Draw x positions are
/// window-relative. Zero-width metrics paint nothing.
pub fn paint(metrics: FontMetrics, origin: u32, visible_width: u32, canvas: &mut impl Canvas) {
    let baseline = metrics.line_height;
    for tick in ticks_from(origin, column_count(metrics, visible_width)) {
        let x = (tick.col() - origin) * metrics.char_width;
        match tick {
            Tick::Label { text, .. } => {
                canvas.draw_text(x, baseline, &text);
                canvas.draw_line(x, baseline, x, baseline + TICK_DROP);
            }
            Tick::Dot { .. } => canvas.draw_text(x, baseline, "."),
        }
    }
}

/// The ruler widget: current font plus a pending-repaint flag.
///
/// [`set_font`](Self::set_font) is the single way the font changes, so
/// the strip can never disagree with the text area it annotates.
#[derive(Debug, Clone)]
pub struct Ruler {
    font: FontSpec,
    repaint_requested: bool,
}

impl Ruler {
    pub const fn new(font: FontSpec) -> Self {
        Self {
            font,
            repaint_requested: true,
        }
    }

    pub const fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn set_font(&mut self, font: FontSpec) {
        self.font = font;
        self.repaint_requested = true;
    }

    /// Records that the cursor moved; the next [`take_repaint`]
    /// returns true exactly once no matter how many moves happened.
    ///
    /// [`take_repaint`]: Self::take_repaint
    pub const fn notify_cursor_moved(&mut self) {
        self.repaint_requested = true;
    }

    pub const fn take_repaint(&mut self) -> bool {
        let pending = self.repaint_requested;
        self.repaint_requested = false;
        pending
    }

    /// Paint a window of the strip; `origin` is the absolute column at
    /// its left edge.
    pub fn paint(&self, origin: u32, visible_width: u32, canvas: &mut impl Canvas) {
        paint(self.font.metrics(), origin, visible_width, canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Default)]
    struct Recording {
        texts: Vec<(u32, u32, String)>,
        lines: Vec<(u32, u32, u32, u32)>,
    }

    impl Canvas for Recording {
        fn draw_text(&mut self, x: u32, y: u32, text: &str) {
            self.texts.push((x, y, text.to_string()));
        }

        fn draw_line(&mut self, x1: u32, y1: u32, x2: u32, y2: u32) {
            self.lines.push((x1, y1, x2, y2));
        }
    }

    fn labels_in(columns: u32) -> Vec<u32> {
        ticks(columns)
            .into_iter()
            .filter_map(|t| match t {
                Tick::Label { col, .. } => Some(col),
                Tick::Dot { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_labels_only_at_multiples_of_ten() {
        assert_eq!(labels_in(31), vec![0, 10, 20, 30]);
    }

    #[test]
    fn test_odd_multiples_of_five_draw_nothing() {
        let marks = ticks(40);
        for col in [5, 15, 25, 35] {
            assert!(
                !marks.iter().any(|t| t.col() == col),
                "column {col} should carry no mark"
            );
        }
    }

    #[test]
    fn test_dots_between_marks() {
        let marks = ticks(10);
        assert_eq!(
            marks[1],
            Tick::Dot { col: 1 },
            "non-multiples of five are dots"
        );
        assert_eq!(marks.iter().filter(|t| matches!(t, Tick::Dot { .. })).count(), 8);
    }

    #[test]
    fn test_column_count_floors() {
        let metrics = FontMetrics {
            char_width: 10,
            line_height: 16,
        };
        assert_eq!(column_count(metrics, 250), 25);
        assert_eq!(column_count(metrics, 259), 25);
        assert_eq!(column_count(metrics, 9), 0);
    }

    #[test]
    fn test_column_count_zero_width_font() {
        let metrics = FontMetrics {
            char_width: 0,
            line_height: 0,
        };
        assert_eq!(column_count(metrics, 1000), 0);
    }

    #[test]
    fn test_paint_250px_strip() {
        // 25 columns at 10px: labels 0/10/20, ticks under each, 20 dots.
        let metrics = FontMetrics {
            char_width: 10,
            line_height: 16,
        };
        let mut canvas = Recording::default();
        paint(metrics, 0, 250, &mut canvas);

        let label_xs: Vec<u32> = canvas
            .texts
            .iter()
            .filter(|(_, _, t)| t != ".")
            .map(|(x, _, _)| *x)
            .collect();
        assert_eq!(label_xs, vec![0, 100, 200]);
        assert_eq!(
            canvas.lines,
            vec![(0, 16, 0, 26), (100, 16, 100, 26), (200, 16, 200, 26)]
        );
        assert_eq!(canvas.texts.iter().filter(|(_, _, t)| t == ".").count(), 20);
    }

    #[test]
    fn test_paint_uses_line_height_as_baseline() {
        let metrics = FontMetrics {
            char_width: 6,
            line_height: 13,
        };
        let mut canvas = Recording::default();
        paint(metrics, 0, 60, &mut canvas);
        assert!(canvas.texts.iter().all(|(_, y, _)| *y == 13));
        assert!(canvas.lines.iter().all(|(_, y1, _, y2)| (*y1, *y2) == (13, 23)));
    }

    #[test]
    fn test_paint_panned_window_numbers_absolute_columns() {
        // Columns 118..128: the only label is 120, two columns into the
        // window; 125 carries no mark at all.
        let metrics = FontMetrics {
            char_width: 10,
            line_height: 16,
        };
        let mut canvas = Recording::default();
        paint(metrics, 118, 100, &mut canvas);

        let labels: Vec<(u32, &str)> = canvas
            .texts
            .iter()
            .filter(|(_, _, t)| t != ".")
            .map(|(x, _, t)| (*x, t.as_str()))
            .collect();
        assert_eq!(labels, vec![(20, "120")]);
        assert_eq!(canvas.lines, vec![(20, 16, 20, 26)]);
        assert_eq!(canvas.texts.iter().filter(|(_, _, t)| t == ".").count(), 8);
    }

    #[test]
    fn test_paint_degenerate_metrics_draws_nothing() {
        let metrics = FontMetrics {
            char_width: 0,
            line_height: 0,
        };
        let mut canvas = Recording::default();
        paint(metrics, 0, 400, &mut canvas);
        assert!(canvas.texts.is_empty());
        assert!(canvas.lines.is_empty());
    }

    #[test]
    fn test_column_count_grid_across_fonts_and_widths() {
        // (point size, [columns at 100px, 400px, 1000px])
        let cases = [
            (8u16, [25u32, 100, 250]),
            (10, [16, 66, 166]),
            (12, [14, 57, 142]),
            (24, [7, 28, 71]),
        ];
        for (size, expected) in cases {
            let metrics = FontSpec::new("Mono", size).metrics();
            for (width, want) in [100u32, 400, 1000].into_iter().zip(expected) {
                let columns = column_count(metrics, width);
                assert_eq!(columns, want, "size {size}, width {width}");
                let marks = ticks(columns);
                assert!(marks.iter().all(|t| t.col() < columns));
                for pair in marks.windows(2) {
                    assert!(pair[0].col() < pair[1].col(), "marks ascend");
                }
            }
        }
    }

    #[test]
    fn test_set_font_requests_repaint() {
        let mut ruler = Ruler::new(FontSpec::default());
        assert!(ruler.take_repaint(), "fresh ruler paints once");
        ruler.set_font(FontSpec::new("Hack", 18));
        assert_eq!(ruler.font(), &FontSpec::new("Hack", 18));
        assert!(ruler.take_repaint());
    }

    #[test]
    fn test_cursor_moves_coalesce_into_one_repaint() {
        let mut ruler = Ruler::new(FontSpec::default());
        let _ = ruler.take_repaint();
        for _ in 0..50 {
            ruler.notify_cursor_moved();
        }
        assert!(ruler.take_repaint());
        assert!(!ruler.take_repaint(), "drained until the next move");
    }

    proptest! {
        #[test]
        fn prop_label_cadence(columns in 0u32..500) {
            let marks = ticks(columns);
            for col in 0..columns {
                let mark = marks.iter().find(|t| t.col() == col);
                if col % 5 == 0 {
                    if col % 10 == 5 {
                        prop_assert!(mark.is_none());
                    } else {
                        let is_label = matches!(mark, Some(Tick::Label { .. }));
                        prop_assert!(is_label, "column {} should carry a label", col);
                    }
                } else {
                    prop_assert_eq!(mark, Some(&Tick::Dot { col }));
                }
            }
        }
    }
}
