use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::Model;

use super::{MENU_HEIGHT, RULER_ROWS, STATUS_HEIGHT, menu, overlays, ruler_view, status};

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();

    let menu_area = Rect { height: MENU_HEIGHT.min(area.height), ..area };
    let ruler_area = Rect {
        y: area.y + MENU_HEIGHT,
        height: RULER_ROWS.min(area.height.saturating_sub(MENU_HEIGHT)),
        ..area
    };

    let toast_active = model.active_toast().is_some();
    let footer_rows = STATUS_HEIGHT + u16::from(toast_active);
    let text_area = Rect {
        y: area.y + MENU_HEIGHT + RULER_ROWS,
        height: area
            .height
            .saturating_sub(MENU_HEIGHT + RULER_ROWS + footer_rows),
        ..area
    };
    let toast_area = Rect {
        y: area.y + area.height.saturating_sub(footer_rows),
        height: 1,
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(STATUS_HEIGHT),
        height: STATUS_HEIGHT.min(area.height),
        ..area
    };

    // The ruler shares the text area's horizontal pan so its numbers
    // stay aligned with buffer columns.
    let origin = u32::try_from(pan_offset(model.buffer.cursor().col, area.width)).unwrap_or(u32::MAX);

    menu::render_menu_bar(model, frame, menu_area);
    ruler_view::render_ruler(&model.ruler, origin, frame, ruler_area);
    render_text_area(model, frame, text_area);
    if toast_active {
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, status_area);

    if model.menu.is_some() {
        menu::render_dropdown(model, frame, area);
    }
    overlays::render_dialog(model, frame, area);
}

/// Columns panned off the left edge so the cursor stays visible.
pub const fn pan_offset(cursor_col: usize, width: u16) -> usize {
    if width == 0 {
        return cursor_col;
    }
    let last_visible = (width - 1) as usize;
    cursor_col.saturating_sub(last_visible)
}

fn render_text_area(model: &Model, frame: &mut Frame, area: Rect) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let cursor = model.buffer.cursor();
    let pan = pan_offset(cursor.col, area.width);

    let start = model.scroll;
    let end = (start + area.height as usize).min(model.buffer.line_count());

    let mut content: Vec<Line> = Vec::with_capacity(end - start);
    for line_idx in start..end {
        let text = model.buffer.line_text(line_idx).unwrap_or_default();
        content.push(Line::raw(
            text.chars().skip(pan).collect::<String>(),
        ));
    }
    frame.render_widget(Paragraph::new(content), area);

    // Hardware cursor placement; suppressed while a menu or dialog has
    // focus.
    if model.menu.is_none() && model.dialog.is_none() && cursor.line >= start && cursor.line < start + area.height as usize {
        let line = model.buffer.line_text(cursor.line).unwrap_or_default();
        let prefix: String = line.chars().skip(pan).take(cursor.col - pan).collect();
        #[allow(clippy::cast_possible_truncation)]
        let x = area.x + (prefix.width() as u16).min(area.width.saturating_sub(1));
        #[allow(clippy::cast_possible_truncation)]
        let y = area.y + (cursor.line - start) as u16;
        frame.set_cursor_position((x, y));
    }
}
