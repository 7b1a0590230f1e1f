use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};

/// Status bar text: `Ln {line}, Col {col}   |   {name}`, with a
/// modified marker while the buffer has unsaved changes.
pub fn status_text(model: &Model) -> String {
    let cursor = model.buffer.cursor();
    let modified = if model.buffer.is_dirty() {
        " [modified]"
    } else {
        ""
    };
    format!(
        " Ln {}, Col {}   |   {}{}",
        cursor.line + 1,
        cursor.col + 1,
        model.filename,
        modified
    )
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let bar = Paragraph::new(status_text(model))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
