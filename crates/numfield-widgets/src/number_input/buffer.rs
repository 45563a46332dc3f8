use super::entry::TextHost;

/// The on-screen text of a numeric field: characters, cursor, whole-text
/// selection, and a field-local clipboard.
///
/// Editing here is the host's default behavior; whether an edit may happen
/// at all is decided by the entry before the buffer is touched.
#[derive(Debug, Clone, Default)]
pub(crate) struct EditBuffer {
    chars: Vec<char>,
    cursor: usize,
    selected: bool,
    clipboard: String,
}

impl EditBuffer {
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }

    /// Adopt the entry's normalized value if it differs from the buffer,
    /// keeping the cursor where it was when possible.
    pub fn sync(&mut self, value: &str) {
        if self.chars.iter().copied().eq(value.chars()) {
            return;
        }
        self.chars = value.chars().collect();
        self.cursor = self.cursor.min(self.chars.len());
        self.selected = self.selected && !self.chars.is_empty();
    }

    /// Replace everything and park the cursor at the end.
    pub fn reset_to(&mut self, value: &str) {
        self.chars = value.chars().collect();
        self.cursor = self.chars.len();
        self.selected = false;
    }

    pub fn insert(&mut self, c: char) {
        self.delete_selection();
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Insert a typed character. A sign always lands in front of the value,
    /// wherever the cursor is, and the cursor keeps its place in the digits.
    pub fn type_char(&mut self, c: char) {
        if c != '-' {
            self.insert(c);
            return;
        }
        self.delete_selection();
        self.chars.insert(0, '-');
        self.cursor += 1;
    }

    pub fn backspace(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.chars.remove(self.cursor);
        true
    }

    /// Drop the selected text. Returns `false` if nothing was selected.
    pub fn delete_selection(&mut self) -> bool {
        if !std::mem::take(&mut self.selected) {
            return false;
        }
        self.chars.clear();
        self.cursor = 0;
        true
    }

    pub fn deselect(&mut self) {
        self.selected = false;
    }

    pub fn move_left(&mut self) {
        if std::mem::take(&mut self.selected) {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    pub fn move_right(&mut self) {
        if std::mem::take(&mut self.selected) {
            self.cursor = self.chars.len();
        } else if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.selected = false;
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.selected = false;
        self.cursor = self.chars.len();
    }

    /// Copy the selection, if any, to the clipboard.
    pub fn copy(&mut self) -> bool {
        if !self.selected {
            return false;
        }
        self.clipboard = self.text();
        true
    }

    /// Copy then delete the selection.
    pub fn cut(&mut self) -> bool {
        self.copy() && self.delete_selection()
    }
}

impl TextHost for EditBuffer {
    fn select_all(&mut self) {
        self.selected = !self.chars.is_empty();
        self.cursor = self.chars.len();
    }

    fn set_displayed_text(&mut self, text: &str) {
        self.reset_to(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(text: &str) -> EditBuffer {
        let mut buf = EditBuffer::default();
        buf.reset_to(text);
        buf
    }

    #[test]
    fn insert_at_cursor() {
        let mut buf = buffer("15");
        buf.move_left();
        buf.insert('2');
        assert_eq!(buf.text(), "125");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn insert_replaces_selection() {
        let mut buf = buffer("99");
        buf.select_all();
        buf.insert('4');
        assert_eq!(buf.text(), "4");
        assert!(!buf.is_selected());
    }

    #[test]
    fn typed_sign_goes_in_front() {
        let mut buf = buffer("12");
        buf.type_char('-');
        assert_eq!(buf.text(), "-12");
        assert_eq!(buf.cursor(), 3);

        let mut buf = buffer("12");
        buf.move_left();
        buf.type_char('-');
        buf.type_char('5');
        assert_eq!(buf.text(), "-152");
    }

    #[test]
    fn typed_sign_replaces_selection() {
        let mut buf = buffer("40");
        buf.select_all();
        buf.type_char('-');
        assert_eq!(buf.text(), "-");
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn backspace_and_delete() {
        let mut buf = buffer("123");
        assert!(buf.backspace());
        assert_eq!(buf.text(), "12");
        assert!(!buf.delete());
        buf.move_home();
        assert!(!buf.backspace());
        assert!(buf.delete());
        assert_eq!(buf.text(), "2");
    }

    #[test]
    fn backspace_removes_selection() {
        let mut buf = buffer("-4.5");
        buf.select_all();
        assert!(buf.backspace());
        assert_eq!(buf.text(), "");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn arrows_collapse_selection() {
        let mut buf = buffer("123");
        buf.select_all();
        buf.move_left();
        assert!(!buf.is_selected());
        assert_eq!(buf.cursor(), 0);

        buf.select_all();
        buf.move_right();
        assert!(!buf.is_selected());
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn select_all_on_empty_selects_nothing() {
        let mut buf = EditBuffer::default();
        buf.select_all();
        assert!(!buf.is_selected());
    }

    #[test]
    fn copy_needs_selection() {
        let mut buf = buffer("12");
        assert!(!buf.copy());
        assert_eq!(buf.clipboard(), "");
        buf.select_all();
        assert!(buf.copy());
        assert_eq!(buf.clipboard(), "12");
        assert_eq!(buf.text(), "12");
    }

    #[test]
    fn cut_moves_text_to_clipboard() {
        let mut buf = buffer("7.5");
        buf.select_all();
        assert!(buf.cut());
        assert_eq!(buf.text(), "");
        assert_eq!(buf.clipboard(), "7.5");
    }

    #[test]
    fn sync_clamps_cursor() {
        let mut buf = buffer("5-");
        buf.sync("5");
        assert_eq!(buf.text(), "5");
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn set_displayed_text_resets() {
        let mut buf = buffer("42");
        buf.select_all();
        buf.set_displayed_text("");
        assert_eq!(buf.text(), "");
        assert_eq!(buf.cursor(), 0);
        assert!(!buf.is_selected());
    }
}
