use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::model::{Dialog, Model};
use crate::app::{App, Message};
use crate::editor::Direction;
use crate::ui::{TEXT_TOP, menu};

use super::event_loop::ResizeDebouncer;

impl App {
    pub(super) fn handle_event(
        event: &Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(*key, model),
            Event::Mouse(mouse) => handle_mouse(*mouse, model),
            Event::Resize(w, h) => {
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }
}

fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
    if model.dialog.is_some() {
        return handle_dialog_key(key, model);
    }
    if model.menu.is_some() {
        return handle_menu_key(key);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') => Some(Message::OpenSaveDialog),
            KeyCode::Char('q') => Some(Message::RequestExit),
            KeyCode::Char('x') => Some(Message::CutLine),
            KeyCode::Char('c') => Some(Message::CopyLine),
            KeyCode::Char('v') => Some(Message::PasteLine),
            KeyCode::Char('f') => Some(Message::OpenFontDialog),
            KeyCode::Char('a') => Some(Message::OpenAbout),
            KeyCode::Char('l') => Some(Message::Redraw),
            KeyCode::Left => Some(Message::MoveWordLeft),
            KeyCode::Right => Some(Message::MoveWordRight),
            KeyCode::Home => Some(Message::MoveBufferStart),
            KeyCode::End => Some(Message::MoveBufferEnd),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char('f') => Some(Message::OpenMenu(0)),
            KeyCode::Char('e') => Some(Message::OpenMenu(1)),
            KeyCode::Char('s') => Some(Message::OpenMenu(2)),
            KeyCode::Char('h') => Some(Message::OpenMenu(3)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::F(10) => Some(Message::OpenMenu(0)),
        KeyCode::Char(ch) => Some(Message::Insert(ch)),
        KeyCode::Tab => Some(Message::Insert('\t')),
        KeyCode::Enter => Some(Message::InsertNewline),
        KeyCode::Backspace => Some(Message::DeleteBack),
        KeyCode::Delete => Some(Message::DeleteForward),
        KeyCode::Left => Some(Message::Move(Direction::Left)),
        KeyCode::Right => Some(Message::Move(Direction::Right)),
        KeyCode::Up => Some(Message::Move(Direction::Up)),
        KeyCode::Down => Some(Message::Move(Direction::Down)),
        KeyCode::Home => Some(Message::MoveHome),
        KeyCode::End => Some(Message::MoveEnd),
        KeyCode::PageUp => Some(Message::PageUp),
        KeyCode::PageDown => Some(Message::PageDown),
        _ => None,
    }
}

fn handle_menu_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Esc | KeyCode::F(10) => Some(Message::CloseMenu),
        KeyCode::Left => Some(Message::MenuLeft),
        KeyCode::Right => Some(Message::MenuRight),
        KeyCode::Up => Some(Message::MenuUp),
        KeyCode::Down => Some(Message::MenuDown),
        KeyCode::Enter => Some(Message::MenuActivate),
        _ => None,
    }
}

fn handle_dialog_key(key: KeyEvent, model: &Model) -> Option<Message> {
    match &model.dialog {
        Some(Dialog::About) => Some(Message::DialogCancel),
        Some(Dialog::ConfirmExit) => match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Message::DialogAccept),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Message::DialogCancel),
            _ => None,
        },
        Some(Dialog::SaveAs { .. } | Dialog::Font { .. }) => match key.code {
            KeyCode::Esc => Some(Message::DialogCancel),
            KeyCode::Enter => Some(Message::DialogAccept),
            KeyCode::Backspace => Some(Message::DialogBackspace),
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => Some(Message::DialogSwitchField),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::DialogInput(ch))
            }
            _ => None,
        },
        None => None,
    }
}

fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
    if model.dialog.is_some() {
        return None;
    }

    let area = Rect::new(0, 0, model.size.0, model.size.1);

    if let Some(cursor) = model.menu {
        if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            if let Some(item) =
                menu::dropdown_item_at(cursor.menu, area, mouse.column, mouse.row)
            {
                return Some(Message::MenuClick(item));
            }
            if mouse.row == 0 {
                if let Some(idx) = menu::title_at(mouse.column) {
                    return Some(Message::OpenMenu(idx));
                }
            }
            return Some(Message::CloseMenu);
        }
        return None;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if mouse.row == 0 {
                return menu::title_at(mouse.column).map(Message::OpenMenu);
            }
            let text_rows = u16::try_from(model.text_height()).unwrap_or(u16::MAX);
            if mouse.row >= TEXT_TOP && mouse.row < TEXT_TOP.saturating_add(text_rows) {
                let line = model.scroll + (mouse.row - TEXT_TOP) as usize;
                return Some(Message::MoveTo(line, mouse.column as usize));
            }
            None
        }
        MouseEventKind::ScrollUp => Some(Message::Move(Direction::Up)),
        MouseEventKind::ScrollDown => Some(Message::Move(Direction::Down)),
        _ => None,
    }
}
