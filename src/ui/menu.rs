//! Menu bar and dropdown menus.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::Model;

/// What a menu entry does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Save,
    Exit,
    Cut,
    Copy,
    Paste,
    Font,
    About,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub shortcut: &'static str,
    pub action: MenuAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    pub title: &'static str,
    pub items: &'static [MenuItem],
}

/// The menu bar: File, Edit, Settings, Help.
pub const MENUS: &[Menu] = &[
    Menu {
        title: "File",
        items: &[
            MenuItem {
                label: "Save",
                shortcut: "Ctrl+S",
                action: MenuAction::Save,
            },
            MenuItem {
                label: "Exit",
                shortcut: "Ctrl+Q",
                action: MenuAction::Exit,
            },
        ],
    },
    Menu {
        title: "Edit",
        items: &[
            MenuItem {
                label: "Cut",
                shortcut: "Ctrl+X",
                action: MenuAction::Cut,
            },
            MenuItem {
                label: "Copy",
                shortcut: "Ctrl+C",
                action: MenuAction::Copy,
            },
            MenuItem {
                label: "Paste",
                shortcut: "Ctrl+V",
                action: MenuAction::Paste,
            },
        ],
    },
    Menu {
        title: "Settings",
        items: &[MenuItem {
            label: "Font…",
            shortcut: "Ctrl+F",
            action: MenuAction::Font,
        }],
    },
    Menu {
        title: "Help",
        items: &[MenuItem {
            label: "About",
            shortcut: "Ctrl+A",
            action: MenuAction::About,
        }],
    },
];

/// Horizontal extent of each menu title in the bar, as `(start, len)`.
fn title_spans() -> impl Iterator<Item = (u16, u16)> {
    let mut x = 1u16;
    MENUS.iter().map(move |menu| {
        #[allow(clippy::cast_possible_truncation)]
        let len = menu.title.len() as u16;
        let span = (x, len);
        x += len + 2;
        span
    })
}

/// Which menu title sits under column `x`, if any.
pub fn title_at(x: u16) -> Option<usize> {
    title_spans().position(|(start, len)| x >= start && x < start + len)
}

/// Screen rectangle of the open dropdown for menu `idx`.
pub fn dropdown_rect(idx: usize, area: Rect) -> Rect {
    let (start, _) = title_spans().nth(idx).unwrap_or((1, 0));
    #[allow(clippy::cast_possible_truncation)]
    let rows = MENUS[idx].items.len() as u16;
    let width = 24u16.min(area.width);
    let x = start.min(area.width.saturating_sub(width));
    Rect::new(x, 1, width, (rows + 2).min(area.height.saturating_sub(1)))
}

/// Dropdown item index under screen position `(x, y)`, if any.
pub fn dropdown_item_at(idx: usize, area: Rect, x: u16, y: u16) -> Option<usize> {
    let rect = dropdown_rect(idx, area);
    if x < rect.x + 1 || x >= rect.x + rect.width.saturating_sub(1) {
        return None;
    }
    if y < rect.y + 1 || y >= rect.y + rect.height.saturating_sub(1) {
        return None;
    }
    let item = (y - rect.y - 1) as usize;
    (item < MENUS[idx].items.len()).then_some(item)
}

pub fn render_menu_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let open = model.menu.map(|c| c.menu);
    let mut spans = vec![Span::raw(" ")];
    for (i, menu) in MENUS.iter().enumerate() {
        let style = if open == Some(i) {
            Style::default().bg(Color::White).fg(Color::Black)
        } else {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        };
        spans.push(Span::styled(menu.title, style));
        spans.push(Span::raw("  "));
    }
    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(bar, area);
}

pub fn render_dropdown(model: &Model, frame: &mut Frame, area: Rect) {
    let Some(cursor) = model.menu else {
        return;
    };
    let menu = &MENUS[cursor.menu];
    let rect = dropdown_rect(cursor.menu, area);
    let inner_width = rect.width.saturating_sub(2) as usize;

    let lines: Vec<Line> = menu
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let pad = inner_width
                .saturating_sub(item.label.chars().count() + item.shortcut.len());
            let text = format!("{}{}{}", item.label, " ".repeat(pad), item.shortcut);
            let style = if i == cursor.item {
                Style::default().bg(Color::White).fg(Color::Black)
            } else {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            };
            Line::styled(text, style)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_has_four_menus() {
        let titles: Vec<_> = MENUS.iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["File", "Edit", "Settings", "Help"]);
    }

    #[test]
    fn test_title_hit_testing() {
        // " File  Edit  Settings  Help"
        assert_eq!(title_at(0), None);
        assert_eq!(title_at(1), Some(0));
        assert_eq!(title_at(4), Some(0));
        assert_eq!(title_at(5), None);
        assert_eq!(title_at(7), Some(1));
        assert_eq!(title_at(13), Some(2));
        assert_eq!(title_at(23), Some(3));
        assert_eq!(title_at(60), None);
    }

    #[test]
    fn test_dropdown_rect_sizes_to_items() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = dropdown_rect(1, area);
        assert_eq!(rect.y, 1);
        assert_eq!(rect.height, 5); // 3 items + borders
        assert_eq!(rect.x, 7); // under "Edit"
    }

    #[test]
    fn test_dropdown_item_hit_testing() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = dropdown_rect(0, area);
        assert_eq!(dropdown_item_at(0, area, rect.x + 2, 2), Some(0));
        assert_eq!(dropdown_item_at(0, area, rect.x + 2, 3), Some(1));
        assert_eq!(dropdown_item_at(0, area, rect.x + 2, 4), None);
        assert_eq!(dropdown_item_at(0, area, rect.x, 2), None);
    }
}
