//! Text buffer model
//!
//! - Rope storage
//! - (row, grapheme column) <-> char offset mapping

use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// Borrow a `RopeSlice` as `&str` when it is contiguous.
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

#[derive(Clone)]
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn line(&self, row: usize) -> Option<String> {
        if row < self.rope.len_lines() {
            Some(self.rope.line(row).to_string())
        } else {
            None
        }
    }

    /// Position just past the last grapheme of the buffer.
    pub fn end_pos(&self) -> (usize, usize) {
        let last = self.rope.len_lines().saturating_sub(1);
        (last, self.line_grapheme_len(last))
    }

    pub fn pos_to_char(&self, pos: (usize, usize)) -> usize {
        self.rope.line_to_char(pos.0) + self.grapheme_to_char_index(pos.0, pos.1)
    }

    /// Like [`pos_to_char`](Self::pos_to_char) but rejects positions outside the text.
    pub fn checked_pos_to_char(&self, pos: (usize, usize)) -> Option<usize> {
        if pos.0 >= self.rope.len_lines() || pos.1 > self.line_grapheme_len(pos.0) {
            return None;
        }
        Some(self.pos_to_char(pos))
    }

    pub fn grapheme_to_char_index(&self, row: usize, grapheme_index: usize) -> usize {
        let slice = self.rope.line(row);
        let line = slice_to_cow(slice);
        line.graphemes(true)
            .take(grapheme_index)
            .map(|g| g.chars().count())
            .sum()
    }

    pub fn line_grapheme_len(&self, row: usize) -> usize {
        let slice = self.rope.line(row);
        let line = slice_to_cow(slice);
        let content = line
            .strip_suffix("\r\n")
            .or_else(|| line.strip_suffix('\n'))
            .or_else(|| line.strip_suffix('\r'))
            .unwrap_or(&line);
        content.graphemes(true).count()
    }

    /// Insert `s` at `pos` and return the char offset it landed at.
    pub fn insert_str(&mut self, pos: (usize, usize), s: &str) -> Option<usize> {
        let char_offset = self.checked_pos_to_char(pos)?;
        self.rope.insert(char_offset, s);
        Some(char_offset)
    }

    /// Remove the text between `from` and `to` (either order) and return it.
    pub fn delete_range(&mut self, from: (usize, usize), to: (usize, usize)) -> Option<String> {
        let (start, end) = if from <= to { (from, to) } else { (to, from) };
        let start_char = self.checked_pos_to_char(start)?;
        let end_char = self.checked_pos_to_char(end)?;

        let deleted = self.rope.slice(start_char..end_char).to_string();
        self.rope.remove(start_char..end_char);
        Some(deleted)
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
