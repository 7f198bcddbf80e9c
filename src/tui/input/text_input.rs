//! Search field state.

/// A single-line text input with a cursor.
///
/// The cursor is a byte offset that always sits on a char boundary, so
/// multi-byte input is handled correctly.
#[derive(Clone, Debug, Default)]
pub struct TextInput {
    content: String,
    cursor: usize,
}

impl TextInput {
    /// Creates a new empty text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.content[..self.cursor].char_indices().next_back() {
            self.content.remove(idx);
            self.cursor = idx;
        }
    }

    /// Moves the cursor one character left.
    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.content[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    /// Moves the cursor one character right.
    pub fn move_right(&mut self) {
        if let Some(c) = self.content[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Moves the cursor to the beginning.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Clears the content and resets the cursor.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Returns the current content as a string slice.
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Text before the cursor, for cursor placement when rendering.
    pub fn before_cursor(&self) -> &str {
        &self.content[..self.cursor]
    }

    /// Returns whether the input is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_respect_char_boundaries() {
        let mut input = TextInput::new();
        for c in "béß".chars() {
            input.insert(c);
        }
        assert_eq!(input.as_str(), "béß");

        input.move_left();
        input.backspace();
        assert_eq!(input.as_str(), "bß");

        input.move_end();
        input.backspace();
        input.backspace();
        assert!(input.is_empty());
    }
}
