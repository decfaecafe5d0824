use unicode_width::UnicodeWidthChar;

/// A single-line text field. `cursor` counts chars, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    pub fn insert(&mut self, c: char) {
        self.cursor = self.cursor.min(self.char_len());
        let at = self.byte_offset(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        self.cursor = self.cursor.min(self.char_len());
        if self.cursor > 0 {
            let at = self.byte_offset(self.cursor - 1);
            self.buffer.remove(at);
            self.cursor -= 1;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
            self.buffer.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.min(self.char_len()).saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Terminal column of the cursor, counting wide characters as two cells.
    pub fn cursor_display_column(&self) -> usize {
        self.buffer
            .chars()
            .take(self.cursor)
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new();
        for c in text.chars() {
            input.insert(c);
        }
        input
    }

    #[test]
    fn test_typing_appends_at_cursor() {
        let input = typed("Hello");
        assert_eq!(input.value(), "Hello");
        assert_eq!(input.cursor, 5);
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut input = typed("Helo");
        input.move_left();
        input.insert('l');
        assert_eq!(input.value(), "Hello");
        assert_eq!(input.cursor, 4);

        input.move_home();
        input.insert('W');
        assert_eq!(input.value(), "WHello");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_backspace_at_cursor() {
        let mut input = typed("Hello World");
        for _ in 0..6 {
            input.move_left();
        }
        input.backspace();
        assert_eq!(input.value(), "Hell World");
        assert_eq!(input.cursor, 4);

        input.move_home();
        input.backspace();
        assert_eq!(input.value(), "Hell World");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut input = typed("abc");
        input.move_home();
        input.delete();
        assert_eq!(input.value(), "bc");
        input.move_end();
        input.delete();
        assert_eq!(input.value(), "bc");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.move_right();
        assert_eq!(input.cursor, 0);

        let mut input = typed("Hi");
        for _ in 0..10 {
            input.move_right();
        }
        assert_eq!(input.cursor, 2);
        for _ in 0..10 {
            input.move_left();
        }
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = typed("いぬ");
        assert_eq!(input.cursor, 2);
        input.move_left();
        input.insert('ー');
        assert_eq!(input.value(), "いーぬ");
        input.backspace();
        input.backspace();
        assert_eq!(input.value(), "ぬ");
    }

    #[test]
    fn test_cursor_display_column_counts_wide_chars() {
        let input = typed("犬a");
        assert_eq!(input.cursor_display_column(), 3);
    }

    #[test]
    fn test_clear() {
        let mut input = typed("dog");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor, 0);
    }
}
