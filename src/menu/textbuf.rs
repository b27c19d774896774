//! `TextBuffer`: a single-line rune buffer with a cursor.
//!
//! Backs both the Search query and the Input free-text line. The cursor
//! is a rune offset, always in `[0, len]`; column math for the terminal
//! cursor goes through [`crate::width`].

use crate::width;

/// A sequence of runes with an edit cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    runes: Vec<char>,
    cursor: usize,
}

impl TextBuffer {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self {
            runes: Vec::new(),
            cursor: 0,
        }
    }

    /// The buffer's runes.
    pub fn runes(&self) -> &[char] {
        &self.runes
    }

    /// Rune count.
    pub const fn len(&self) -> usize {
        self.runes.len()
    }

    /// Whether the buffer holds no runes.
    pub const fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    /// The cursor's rune offset.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The buffer contents as a string.
    pub fn text(&self) -> String {
        self.runes.iter().collect()
    }

    /// Cell column of the cursor, accounting for wide and combining
    /// runes before it.
    pub fn cursor_cell(&self) -> usize {
        width::cell_offset(&self.runes[..self.cursor])
    }

    /// Splice a rune at the cursor and advance past it.
    pub fn insert(&mut self, ch: char) {
        self.runes.insert(self.cursor, ch);
        self.cursor = (self.cursor + 1).min(self.runes.len());
        self.check();
    }

    /// Remove the rune immediately before the cursor.
    ///
    /// Returns `true` if a rune was removed (no-op at offset 0).
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.runes.remove(self.cursor - 1);
        self.cursor -= 1;
        self.check();
        true
    }

    /// Move the cursor one rune left, clamped at 0.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one rune right, clamped at the end.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.runes.len());
    }

    /// Discard contents and reset the cursor to 0.
    pub fn clear(&mut self) {
        self.runes.clear();
        self.cursor = 0;
    }

    #[inline]
    fn check(&self) {
        debug_assert!(self.cursor <= self.runes.len());
    }
}
