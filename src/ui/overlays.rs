//! Dialog overlays: Save As, font selection, About, exit confirmation.
//!
//! Each dialog is a centered popup over the text area and captures all
//! key input while open.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::{Dialog, FontField, Model};

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        (area.width - width) / 2,
        (area.height - height) / 2,
        width,
        height,
    )
}

pub fn render_dialog(model: &Model, frame: &mut Frame, area: Rect) {
    match &model.dialog {
        Some(Dialog::SaveAs { input }) => render_save_as(input, frame, area),
        Some(Dialog::Font {
            family,
            size,
            field,
        }) => render_font(family, size, *field, frame, area),
        Some(Dialog::About) => render_about(frame, area),
        Some(Dialog::ConfirmExit) => render_confirm_exit(frame, area),
        None => {}
    }
}

fn field_line<'a>(label: &'a str, value: &'a str, active: bool) -> Line<'a> {
    let value_style = if active {
        Style::default().bg(Color::White).fg(Color::Black)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let caret = if active { "_" } else { " " };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("{value}{caret}"), value_style),
    ])
}

fn dialog_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White))
}

fn render_save_as(input: &str, frame: &mut Frame, area: Rect) {
    let popup = centered_popup_rect(area.width.saturating_sub(16).max(40), 7, area);
    let lines = vec![
        field_line("File: ", input, true),
        Line::raw(""),
        Line::styled(
            "  Enter save · Esc cancel",
            Style::default().fg(Color::Indexed(245)),
        ),
    ];
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(dialog_block("Save File")), popup);
}

fn render_font(family: &str, size: &str, field: FontField, frame: &mut Frame, area: Rect) {
    let popup = centered_popup_rect(44.min(area.width), 8, area);
    let lines = vec![
        field_line("Family: ", family, field == FontField::Family),
        field_line("Size:   ", size, field == FontField::Size),
        Line::raw(""),
        Line::styled(
            "  Tab switch · Enter apply · Esc cancel",
            Style::default().fg(Color::Indexed(245)),
        ),
    ];
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(dialog_block("Font")), popup);
}

fn render_about(frame: &mut Frame, area: Rect) {
    let popup = centered_popup_rect(48.min(area.width), 7, area);
    let lines = vec![
        Line::raw("  This program was created by Pablo Niklas."),
        Line::raw(""),
        Line::styled(
            "  any key closes",
            Style::default().fg(Color::Indexed(245)),
        ),
    ];
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(dialog_block("About")), popup);
}

fn render_confirm_exit(frame: &mut Frame, area: Rect) {
    let popup = centered_popup_rect(40.min(area.width), 7, area);
    let lines = vec![
        Line::raw("  Exit without saving?"),
        Line::raw(""),
        Line::styled(
            "  y exit · n/Esc stay",
            Style::default().fg(Color::Indexed(245)),
        ),
    ];
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(dialog_block("Confirm Exit")),
        popup,
    );
}
