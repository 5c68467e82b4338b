//! Single-line editor backing the path and command prompts.
//!
//! The cursor is a byte offset that always sits on a UTF-8 character
//! boundary.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    buffer: String,
    cursor: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Display column of the cursor
    pub fn cursor_column(&self) -> usize {
        unicode_width::UnicodeWidthStr::width(&self.buffer[..self.cursor])
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text; line breaks become spaces.
    pub fn insert_str(&mut self, text: &str) {
        let flat: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        self.buffer.insert_str(self.cursor, &flat);
        self.cursor += flat.len();
    }

    pub fn delete_char_before(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.prev_boundary(self.cursor);
        self.buffer.replace_range(prev..self.cursor, "");
        self.cursor = prev;
    }

    /// Delete back to the start of the previous word.
    pub fn delete_word_before(&mut self) {
        let before = &self.buffer[..self.cursor];
        let trimmed = before.trim_end();
        let start = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());
        self.buffer.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary(self.cursor);
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.buffer[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Return the text and leave the editor empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }

    fn prev_boundary(&self, from: usize) -> usize {
        self.buffer[..from]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(text: &str) -> LineEditor {
        let mut editor = LineEditor::new();
        editor.insert_str(text);
        editor
    }

    #[test]
    fn should_insert_at_cursor() {
        let mut e = editor("/tmp/a.pdf");
        e.move_home();
        e.insert_char('~');
        assert_eq!(e.text(), "~/tmp/a.pdf");
        assert_eq!(e.cursor(), 1);
    }

    #[test]
    fn should_delete_multibyte_chars() {
        let mut e = editor("résumé");
        e.delete_char_before();
        assert_eq!(e.text(), "résum");
        e.move_left();
        e.move_left();
        e.delete_char_before();
        assert_eq!(e.text(), "réum");
    }

    #[test]
    fn should_delete_previous_word() {
        let mut e = editor("server http://h:8000  ");
        e.delete_word_before();
        assert_eq!(e.text(), "server ");
        e.delete_word_before();
        assert_eq!(e.text(), "");
        e.delete_word_before();
        assert_eq!(e.cursor(), 0);
    }

    #[test]
    fn should_flatten_pasted_newlines() {
        let e = editor("/a.pdf\n/b.pdf");
        assert_eq!(e.text(), "/a.pdf /b.pdf");
    }

    #[test]
    fn should_report_display_column_for_wide_chars() {
        let e = editor("文件");
        assert_eq!(e.cursor(), 6);
        assert_eq!(e.cursor_column(), 4);
    }

    #[test]
    fn should_take_and_reset() {
        let mut e = editor("abc");
        assert_eq!(e.take(), "abc");
        assert!(e.is_empty());
        assert_eq!(e.cursor(), 0);
        e.move_right();
        assert_eq!(e.cursor(), 0);
    }
}
