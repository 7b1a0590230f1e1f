use ropey::Rope;

/// Cursor position in the text buffer.
///
/// Columns count characters, not bytes, so every reachable position is
/// a valid char boundary by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based character column within the line.
    pub col: usize,
    /// Remembered column for vertical movement (sticky column).
    want_col: usize,
}

impl Cursor {
    pub const fn origin() -> Self {
        Self {
            line: 0,
            col: 0,
            want_col: 0,
        }
    }

    pub const fn at(line: usize, col: usize) -> Self {
        Self {
            line,
            col,
            want_col: col,
        }
    }

    const fn set_col(&mut self, col: usize) {
        self.col = col;
        self.want_col = col;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::origin()
    }
}

/// Direction for single-step cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A text buffer backed by a rope.
///
/// Holds the text, the editing cursor, and a dirty flag that tracks
/// modifications since the last save.
///
/// Cloning is cheap because ropey shares chunks between clones.
#[derive(Clone)]
pub struct TextBuffer {
    rope: Rope,
    cursor: Cursor,
    dirty: bool,
}

impl TextBuffer {
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: Cursor::origin(),
            dirty: false,
        }
    }

    pub fn empty() -> Self {
        Self::from_text("")
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer clean, e.g. after a successful save.
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Content of a line without its trailing line break.
    pub fn line_text(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let mut s = self.rope.line(line_idx).to_string();
        while s.ends_with('\n') || s.ends_with('\r') {
            s.pop();
        }
        Some(s)
    }

    /// Length of a line in characters, line break excluded.
    pub fn line_chars(&self, line_idx: usize) -> usize {
        self.line_text(line_idx).map_or(0, |s| s.chars().count())
    }

    /// The full buffer content.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn insert_char(&mut self, ch: char) {
        let idx = self.char_idx();
        self.rope.insert_char(idx, ch);
        if ch == '\n' {
            self.cursor.line += 1;
            self.cursor.set_col(0);
        } else {
            self.cursor.set_col(self.cursor.col + 1);
        }
        self.dirty = true;
    }

    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let idx = self.char_idx();
        self.rope.insert(idx, s);
        let breaks = s.matches('\n').count();
        if breaks > 0 {
            self.cursor.line += breaks;
            let tail = s.rsplit('\n').next().unwrap_or("");
            self.cursor.set_col(tail.chars().count());
        } else {
            self.cursor.set_col(self.cursor.col + s.chars().count());
        }
        self.dirty = true;
    }

    /// Split the current line at the cursor (Enter).
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the character before the cursor (Backspace), joining
    /// lines at column zero. Returns whether anything was deleted.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor.line == 0 && self.cursor.col == 0 {
            return false;
        }
        let idx = self.char_idx();
        if self.cursor.col == 0 {
            let prev_len = self.line_chars(self.cursor.line - 1);
            // A CRLF break is two chars; remove the whole sequence so
            // no stray '\r' ends up inside the joined line.
            let start = if idx >= 2
                && self.rope.char(idx - 1) == '\n'
                && self.rope.char(idx - 2) == '\r'
            {
                idx - 2
            } else {
                idx - 1
            };
            self.rope.remove(start..idx);
            self.cursor.line -= 1;
            self.cursor.set_col(prev_len);
        } else {
            self.rope.remove(idx - 1..idx);
            self.cursor.set_col(self.cursor.col - 1);
        }
        self.dirty = true;
        true
    }

    /// Delete the character at the cursor (Delete), joining the next
    /// line at end of line. Returns whether anything was deleted.
    pub fn delete_forward(&mut self) -> bool {
        let idx = self.char_idx();
        if idx >= self.rope.len_chars() {
            return false;
        }
        let end = if self.rope.char(idx) == '\r'
            && idx + 1 < self.rope.len_chars()
            && self.rope.char(idx + 1) == '\n'
        {
            idx + 2
        } else {
            idx + 1
        };
        self.rope.remove(idx..end);
        self.dirty = true;
        true
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        }
    }

    pub const fn move_home(&mut self) {
        self.cursor.set_col(0);
    }

    pub fn move_end(&mut self) {
        let len = self.line_chars(self.cursor.line);
        self.cursor.set_col(len);
    }

    pub const fn move_to_start(&mut self) {
        self.cursor.line = 0;
        self.cursor.set_col(0);
    }

    pub fn move_to_end(&mut self) {
        let last = self.line_count().saturating_sub(1);
        self.cursor.line = last;
        self.cursor.set_col(self.line_chars(last));
    }

    /// Move the cursor to a position, clamping to buffer bounds.
    pub fn move_to(&mut self, line: usize, col: usize) {
        let max_line = self.line_count().saturating_sub(1);
        self.cursor.line = line.min(max_line);
        self.cursor.set_col(col.min(self.line_chars(self.cursor.line)));
    }

    /// Move to the start of the previous word (Ctrl+Left).
    pub fn move_word_left(&mut self) {
        if self.cursor.col == 0 {
            if self.cursor.line > 0 {
                self.cursor.line -= 1;
                self.cursor.set_col(self.line_chars(self.cursor.line));
            }
            return;
        }
        let chars: Vec<char> = self
            .line_text(self.cursor.line)
            .unwrap_or_default()
            .chars()
            .collect();
        let mut pos = self.cursor.col;
        while pos > 0 && !is_word_char(chars[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && is_word_char(chars[pos - 1]) {
            pos -= 1;
        }
        self.cursor.set_col(pos);
    }

    /// Move past the end of the current word (Ctrl+Right).
    pub fn move_word_right(&mut self) {
        let len = self.line_chars(self.cursor.line);
        if self.cursor.col >= len {
            if self.cursor.line + 1 < self.line_count() {
                self.cursor.line += 1;
                self.cursor.set_col(0);
            }
            return;
        }
        let chars: Vec<char> = self
            .line_text(self.cursor.line)
            .unwrap_or_default()
            .chars()
            .collect();
        let mut pos = self.cursor.col;
        while pos < len && is_word_char(chars[pos]) {
            pos += 1;
        }
        while pos < len && !is_word_char(chars[pos]) {
            pos += 1;
        }
        self.cursor.set_col(pos);
    }

    /// Remove the current line and return its text (line register cut).
    ///
    /// Leaves the cursor at column zero of the line that slides into
    /// place. An empty buffer keeps its single empty line.
    pub fn cut_line(&mut self) -> String {
        let line = self.cursor.line;
        let text = self.line_text(line).unwrap_or_default();
        let start = self.rope.line_to_char(line);
        let end = if line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line + 1)
        } else {
            self.rope.len_chars()
        };
        // Removing the last, newline-less line also eats the previous
        // line break (one or two chars for CRLF) so no empty tail line
        // is left behind.
        let start = if line + 1 == self.rope.len_lines() && start > 0 {
            let mut s = start - 1;
            if s > 0 && self.rope.char(s) == '\n' && self.rope.char(s - 1) == '\r' {
                s -= 1;
            }
            s
        } else {
            start
        };
        self.rope.remove(start..end);
        let max_line = self.rope.len_lines().saturating_sub(1);
        self.cursor.line = line.min(max_line);
        self.cursor.set_col(0);
        self.dirty = true;
        text
    }

    /// The current line's text (line register copy).
    pub fn copy_line(&self) -> String {
        self.line_text(self.cursor.line).unwrap_or_default()
    }

    /// Insert a register line above the current line (line register
    /// paste). The cursor stays on the line it was on.
    pub fn paste_line(&mut self, text: &str) {
        let start = self.rope.line_to_char(self.cursor.line);
        self.rope.insert(start, &format!("{text}\n"));
        self.cursor.line += 1;
        self.dirty = true;
    }

    // --- Private helpers ---

    /// Cursor position as a rope char index.
    fn char_idx(&self) -> usize {
        let line_start = self.rope.line_to_char(self.cursor.line);
        line_start + self.cursor.col.min(self.line_chars(self.cursor.line))
    }

    fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.set_col(self.cursor.col - 1);
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.set_col(self.line_chars(self.cursor.line));
        }
    }

    fn move_right(&mut self) {
        if self.cursor.col < self.line_chars(self.cursor.line) {
            self.cursor.set_col(self.cursor.col + 1);
        } else if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.set_col(0);
        }
    }

    fn move_up(&mut self) {
        if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.cursor.want_col.min(self.line_chars(self.cursor.line));
        }
    }

    fn move_down(&mut self) {
        if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.col = self.cursor.want_col.min(self.line_chars(self.cursor.line));
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBuffer")
            .field("lines", &self.rope.len_lines())
            .field("cursor", &self.cursor)
            .field("dirty", &self.dirty)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buf = TextBuffer::empty();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_text(0), Some(String::new()));
        assert!(!buf.is_dirty());
    }

    #[test]
    fn test_from_text_preserves_content() {
        let buf = TextBuffer::from_text("hello\nworld");
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line_text(0), Some("hello".to_string()));
        assert_eq!(buf.line_text(1), Some("world".to_string()));
        assert_eq!(buf.text(), "hello\nworld");
    }

    #[test]
    fn test_line_text_out_of_bounds() {
        let buf = TextBuffer::from_text("hello");
        assert_eq!(buf.line_text(1), None);
    }

    #[test]
    fn test_insert_char_advances_cursor() {
        let mut buf = TextBuffer::empty();
        buf.insert_char('h');
        buf.insert_char('i');
        assert_eq!(buf.text(), "hi");
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
        assert!(buf.is_dirty());
    }

    #[test]
    fn test_insert_char_counts_chars_not_bytes() {
        let mut buf = TextBuffer::empty();
        buf.insert_char('é');
        buf.insert_char('x');
        assert_eq!(buf.cursor().col, 2);
        assert_eq!(buf.text(), "éx");
    }

    #[test]
    fn test_insert_newline_splits_line() {
        let mut buf = TextBuffer::from_text("hello");
        buf.move_to(0, 2);
        buf.insert_newline();
        assert_eq!(buf.text(), "he\nllo");
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_insert_str_multiline() {
        let mut buf = TextBuffer::from_text("ab");
        buf.move_to(0, 1);
        buf.insert_str("x\ny");
        assert_eq!(buf.text(), "ax\nyb");
        assert_eq!(buf.cursor(), Cursor::at(1, 1));
    }

    #[test]
    fn test_delete_back_within_line() {
        let mut buf = TextBuffer::from_text("hello");
        buf.move_to(0, 3);
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "helo");
        assert_eq!(buf.cursor().col, 2);
    }

    #[test]
    fn test_delete_back_joins_lines() {
        let mut buf = TextBuffer::from_text("ab\ncd");
        buf.move_to(1, 0);
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "abcd");
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    #[test]
    fn test_delete_back_joins_crlf_lines() {
        let mut buf = TextBuffer::from_text("ab\r\ncd");
        buf.move_to(1, 0);
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "abcd");
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    #[test]
    fn test_delete_back_at_origin_is_noop() {
        let mut buf = TextBuffer::from_text("ab");
        assert!(!buf.delete_back());
        assert!(!buf.is_dirty());
    }

    #[test]
    fn test_delete_forward_joins_next_line() {
        let mut buf = TextBuffer::from_text("ab\ncd");
        buf.move_to(0, 2);
        assert!(buf.delete_forward());
        assert_eq!(buf.text(), "abcd");
    }

    #[test]
    fn test_delete_forward_joins_crlf_lines() {
        let mut buf = TextBuffer::from_text("ab\r\ncd");
        buf.move_to(0, 2);
        assert!(buf.delete_forward());
        assert_eq!(buf.text(), "abcd", "one press removes the whole break");
    }

    #[test]
    fn test_delete_forward_at_end_is_noop() {
        let mut buf = TextBuffer::from_text("ab");
        buf.move_to(0, 2);
        assert!(!buf.delete_forward());
    }

    #[test]
    fn test_move_right_wraps_to_next_line() {
        let mut buf = TextBuffer::from_text("ab\ncd");
        buf.move_to(0, 2);
        buf.move_cursor(Direction::Right);
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_move_left_wraps_to_previous_line_end() {
        let mut buf = TextBuffer::from_text("ab\ncd");
        buf.move_to(1, 0);
        buf.move_cursor(Direction::Left);
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    #[test]
    fn test_vertical_movement_keeps_sticky_column() {
        let mut buf = TextBuffer::from_text("long line here\nab\nanother long line");
        buf.move_to(0, 10);
        buf.move_cursor(Direction::Down);
        assert_eq!(buf.cursor().col, 2);
        buf.move_cursor(Direction::Down);
        assert_eq!(buf.cursor().col, 10);
    }

    #[test]
    fn test_home_resets_sticky_column() {
        let mut buf = TextBuffer::from_text("abcdef\nxy");
        buf.move_to(0, 4);
        buf.move_home();
        buf.move_cursor(Direction::Down);
        assert_eq!(buf.cursor().col, 0);
    }

    #[test]
    fn test_move_end_and_buffer_extremes() {
        let mut buf = TextBuffer::from_text("abc\ndefgh");
        buf.move_end();
        assert_eq!(buf.cursor(), Cursor::at(0, 3));
        buf.move_to_end();
        assert_eq!(buf.cursor(), Cursor::at(1, 5));
        buf.move_to_start();
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_move_to_clamps() {
        let mut buf = TextBuffer::from_text("abc\nde");
        buf.move_to(10, 10);
        assert_eq!(buf.cursor(), Cursor::at(1, 2));
    }

    #[test]
    fn test_word_motion() {
        let mut buf = TextBuffer::from_text("foo bar_baz  qux");
        buf.move_word_right();
        assert_eq!(buf.cursor().col, 4);
        buf.move_word_right();
        assert_eq!(buf.cursor().col, 13);
        buf.move_word_left();
        assert_eq!(buf.cursor().col, 4);
        buf.move_word_left();
        assert_eq!(buf.cursor().col, 0);
    }

    #[test]
    fn test_word_motion_crosses_lines() {
        let mut buf = TextBuffer::from_text("ab\ncd");
        buf.move_to(0, 2);
        buf.move_word_right();
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
        buf.move_word_left();
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    #[test]
    fn test_cut_line_middle() {
        let mut buf = TextBuffer::from_text("one\ntwo\nthree");
        buf.move_to(1, 2);
        let cut = buf.cut_line();
        assert_eq!(cut, "two");
        assert_eq!(buf.text(), "one\nthree");
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_cut_last_line_removes_preceding_break() {
        let mut buf = TextBuffer::from_text("one\ntwo");
        buf.move_to(1, 1);
        let cut = buf.cut_line();
        assert_eq!(cut, "two");
        assert_eq!(buf.text(), "one");
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_cut_last_line_removes_preceding_crlf_break() {
        let mut buf = TextBuffer::from_text("one\r\ntwo");
        buf.move_to(1, 0);
        assert_eq!(buf.cut_line(), "two");
        assert_eq!(buf.text(), "one");
    }

    #[test]
    fn test_cut_only_line_leaves_empty_buffer() {
        let mut buf = TextBuffer::from_text("solo");
        let cut = buf.cut_line();
        assert_eq!(cut, "solo");
        assert_eq!(buf.text(), "");
        assert_eq!(buf.line_count(), 1);
    }

    #[test]
    fn test_copy_line_does_not_modify() {
        let buf = {
            let mut b = TextBuffer::from_text("one\ntwo");
            b.move_to(1, 0);
            b.mark_clean();
            b
        };
        assert_eq!(buf.copy_line(), "two");
        assert!(!buf.is_dirty());
    }

    #[test]
    fn test_paste_line_inserts_above_cursor() {
        let mut buf = TextBuffer::from_text("one\nthree");
        buf.move_to(1, 3);
        buf.paste_line("two");
        assert_eq!(buf.text(), "one\ntwo\nthree");
        assert_eq!(buf.cursor().line, 2);
    }

    #[test]
    fn test_mark_clean_after_save() {
        let mut buf = TextBuffer::from_text("x");
        buf.insert_char('y');
        assert!(buf.is_dirty());
        buf.mark_clean();
        assert!(!buf.is_dirty());
    }
}
