use std::path::PathBuf;

use crate::app::model::{Dialog, FontField, MenuCursor, Model, ToastLevel};
use crate::editor::Direction;
use crate::font::FontSpec;
use crate::ui::menu::{MENUS, MenuAction};

/// All possible events and actions in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Insert a character at the cursor
    Insert(char),
    /// Split the line at the cursor (Enter)
    InsertNewline,
    /// Delete character before cursor (Backspace)
    DeleteBack,
    /// Delete character at cursor (Delete)
    DeleteForward,

    // Cursor movement
    /// Move cursor one step
    Move(Direction),
    /// Move cursor to beginning of line (Home)
    MoveHome,
    /// Move cursor to end of line (End)
    MoveEnd,
    /// Move cursor one word left (Ctrl+Left)
    MoveWordLeft,
    /// Move cursor one word right (Ctrl+Right)
    MoveWordRight,
    /// Move cursor to start of buffer (Ctrl+Home)
    MoveBufferStart,
    /// Move cursor to end of buffer (Ctrl+End)
    MoveBufferEnd,
    /// Move cursor one text-area page up
    PageUp,
    /// Move cursor one text-area page down
    PageDown,
    /// Move cursor to absolute position, e.g. from a mouse click
    MoveTo(usize, usize),

    // Line register (Edit menu)
    /// Cut the current line into the register
    CutLine,
    /// Copy the current line into the register
    CopyLine,
    /// Paste the register above the current line
    PasteLine,

    // Menu bar
    /// Open a menu by index
    OpenMenu(usize),
    /// Move to the previous menu
    MenuLeft,
    /// Move to the next menu
    MenuRight,
    /// Move the item selection up
    MenuUp,
    /// Move the item selection down
    MenuDown,
    /// Activate the selected item
    MenuActivate,
    /// Activate a specific item of the open menu (mouse click)
    MenuClick(usize),
    /// Close the menu without activating
    CloseMenu,

    // Dialogs
    /// Open the Save As prompt
    OpenSaveDialog,
    /// Open the font prompt
    OpenFontDialog,
    /// Open the About popup
    OpenAbout,
    /// Ask for exit confirmation
    RequestExit,
    /// Type into the active dialog field
    DialogInput(char),
    /// Delete from the active dialog field
    DialogBackspace,
    /// Switch between dialog fields (Tab)
    DialogSwitchField,
    /// Confirm the active dialog
    DialogAccept,
    /// Dismiss the active dialog
    DialogCancel,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Force a redraw
    Redraw,
}

/// The message a menu entry produces when activated.
const fn action_message(action: MenuAction) -> Message {
    match action {
        MenuAction::Save => Message::OpenSaveDialog,
        MenuAction::Exit => Message::RequestExit,
        MenuAction::Cut => Message::CutLine,
        MenuAction::Copy => Message::CopyLine,
        MenuAction::Paste => Message::PasteLine,
        MenuAction::Font => Message::OpenFontDialog,
        MenuAction::About => Message::OpenAbout,
    }
}

/// Pure state transition.
#[allow(clippy::needless_pass_by_value)]
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // --- Editing ---
        Message::Insert(ch) => {
            if ch == '\t' {
                model.buffer.insert_str("    ");
            } else {
                model.buffer.insert_char(ch);
            }
            after_cursor_change(model)
        }
        Message::InsertNewline => {
            model.buffer.insert_newline();
            after_cursor_change(model)
        }
        Message::DeleteBack => {
            model.buffer.delete_back();
            after_cursor_change(model)
        }
        Message::DeleteForward => {
            model.buffer.delete_forward();
            after_cursor_change(model)
        }

        // --- Cursor movement ---
        Message::Move(direction) => {
            model.buffer.move_cursor(direction);
            after_cursor_change(model)
        }
        Message::MoveHome => {
            model.buffer.move_home();
            after_cursor_change(model)
        }
        Message::MoveEnd => {
            model.buffer.move_end();
            after_cursor_change(model)
        }
        Message::MoveWordLeft => {
            model.buffer.move_word_left();
            after_cursor_change(model)
        }
        Message::MoveWordRight => {
            model.buffer.move_word_right();
            after_cursor_change(model)
        }
        Message::MoveBufferStart => {
            model.buffer.move_to_start();
            after_cursor_change(model)
        }
        Message::MoveBufferEnd => {
            model.buffer.move_to_end();
            after_cursor_change(model)
        }
        Message::PageUp => {
            let cursor = model.buffer.cursor();
            let line = cursor.line.saturating_sub(model.text_height().max(1));
            model.buffer.move_to(line, cursor.col);
            after_cursor_change(model)
        }
        Message::PageDown => {
            let cursor = model.buffer.cursor();
            let line = cursor.line + model.text_height().max(1);
            model.buffer.move_to(line, cursor.col);
            after_cursor_change(model)
        }
        Message::MoveTo(line, col) => {
            model.buffer.move_to(line, col);
            after_cursor_change(model)
        }

        // --- Line register ---
        Message::CutLine => {
            model.clipboard = Some(model.buffer.cut_line());
            after_cursor_change(model)
        }
        Message::CopyLine => {
            model.clipboard = Some(model.buffer.copy_line());
            model
        }
        Message::PasteLine => {
            if let Some(text) = model.clipboard.clone() {
                model.buffer.paste_line(&text);
                return after_cursor_change(model);
            }
            model
        }

        // --- Menu bar ---
        Message::OpenMenu(menu) => {
            model.menu = (menu < MENUS.len()).then_some(MenuCursor { menu, item: 0 });
            model
        }
        Message::MenuLeft => {
            if let Some(cursor) = &mut model.menu {
                cursor.menu = cursor.menu.checked_sub(1).unwrap_or(MENUS.len() - 1);
                cursor.item = 0;
            }
            model
        }
        Message::MenuRight => {
            if let Some(cursor) = &mut model.menu {
                cursor.menu = (cursor.menu + 1) % MENUS.len();
                cursor.item = 0;
            }
            model
        }
        Message::MenuUp => {
            if let Some(cursor) = &mut model.menu {
                let len = MENUS[cursor.menu].items.len();
                cursor.item = cursor.item.checked_sub(1).unwrap_or(len - 1);
            }
            model
        }
        Message::MenuDown => {
            if let Some(cursor) = &mut model.menu {
                let len = MENUS[cursor.menu].items.len();
                cursor.item = (cursor.item + 1) % len;
            }
            model
        }
        Message::MenuActivate => {
            let Some(cursor) = model.menu.take() else {
                return model;
            };
            let action = MENUS[cursor.menu].items[cursor.item].action;
            update(model, action_message(action))
        }
        Message::MenuClick(item) => {
            let Some(cursor) = model.menu.take() else {
                return model;
            };
            let Some(entry) = MENUS[cursor.menu].items.get(item) else {
                return model;
            };
            update(model, action_message(entry.action))
        }
        Message::CloseMenu => {
            model.menu = None;
            model
        }

        // --- Dialogs ---
        Message::OpenSaveDialog => {
            let input = model.file_path.as_ref().map_or_else(
                || model.filename.clone(),
                |p| p.display().to_string(),
            );
            model.dialog = Some(Dialog::SaveAs { input });
            model
        }
        Message::OpenFontDialog => {
            model.dialog = Some(Dialog::Font {
                family: model.font.family.clone(),
                size: model.font.size.to_string(),
                field: FontField::Family,
            });
            model
        }
        Message::OpenAbout => {
            model.dialog = Some(Dialog::About);
            model
        }
        Message::RequestExit => {
            model.dialog = Some(Dialog::ConfirmExit);
            model
        }
        Message::DialogInput(ch) => {
            match &mut model.dialog {
                Some(Dialog::SaveAs { input }) => input.push(ch),
                Some(Dialog::Font {
                    family,
                    size,
                    field,
                }) => match field {
                    FontField::Family => family.push(ch),
                    FontField::Size => size.push(ch),
                },
                _ => {}
            }
            model
        }
        Message::DialogBackspace => {
            match &mut model.dialog {
                Some(Dialog::SaveAs { input }) => {
                    input.pop();
                }
                Some(Dialog::Font {
                    family,
                    size,
                    field,
                }) => {
                    match field {
                        FontField::Family => family.pop(),
                        FontField::Size => size.pop(),
                    };
                }
                _ => {}
            }
            model
        }
        Message::DialogSwitchField => {
            if let Some(Dialog::Font { field, .. }) = &mut model.dialog {
                *field = match field {
                    FontField::Family => FontField::Size,
                    FontField::Size => FontField::Family,
                };
            }
            model
        }
        Message::DialogAccept => accept_dialog(model),
        Message::DialogCancel => {
            model.dialog = None;
            model
        }

        // --- Window ---
        Message::Resize(width, height) => {
            model.size = (width, height);
            model.prefs.window_width = width;
            model.prefs.window_height = height;
            model.follow_cursor();
            model.ruler.notify_cursor_moved();
            model
        }
        Message::Redraw => model,
    }
}

/// Cursor moved: notify the ruler and keep the cursor on screen.
fn after_cursor_change(mut model: Model) -> Model {
    model.ruler.notify_cursor_moved();
    model.follow_cursor();
    model
}

fn accept_dialog(mut model: Model) -> Model {
    match model.dialog.take() {
        Some(Dialog::SaveAs { input }) => {
            let path = input.trim();
            if path.is_empty() {
                model.show_toast(ToastLevel::Warning, "File name is empty");
                model.dialog = Some(Dialog::SaveAs { input });
            } else {
                // The effects layer performs the write.
                model.pending_save = Some(PathBuf::from(path));
            }
        }
        Some(Dialog::Font {
            family,
            size,
            field,
        }) => {
            let trimmed = family.trim();
            let parsed = size.trim().parse::<u16>().ok().filter(|n| *n > 0);
            match (trimmed.is_empty(), parsed) {
                (false, Some(points)) => {
                    model.set_font(FontSpec::new(trimmed, points));
                }
                (true, _) => {
                    model.show_toast(ToastLevel::Warning, "Font family is empty");
                    model.dialog = Some(Dialog::Font {
                        family,
                        size,
                        field,
                    });
                }
                (false, None) => {
                    model.show_toast(
                        ToastLevel::Warning,
                        format!("Invalid font size {:?}", size.trim()),
                    );
                    model.dialog = Some(Dialog::Font {
                        family,
                        size,
                        field,
                    });
                }
            }
        }
        Some(Dialog::About) | None => {}
        Some(Dialog::ConfirmExit) => {
            model.should_quit = true;
        }
    }
    model
}
