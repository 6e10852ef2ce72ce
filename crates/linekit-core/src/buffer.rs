//! The mutable line buffer.
//!
//! [`LineBuffer`] owns the single line of text being edited, the cursor
//! offset within it, and the insert/overwrite mode flag. The invariant
//! `0 <= cursor <= rune_count(text)` is enforced by every mutating
//! operation here; callers never need to validate offsets before or after
//! an edit. All offsets are rune indices (see [`crate::unicode`]).
//!
//! Word boundaries use a single-delimiter model: a word ends at a literal
//! space character, nothing else. This is deliberately not a tokenizer;
//! punctuation, tabs, and other whitespace are treated as word characters.

use crate::unicode;

/// A single editable line with an addressable cursor.
///
/// # Examples
///
/// ```
/// use linekit_core::buffer::LineBuffer;
///
/// let mut buffer = LineBuffer::new();
/// buffer.insert("choice");
/// assert_eq!(buffer.text(), "choice");
/// assert_eq!(buffer.cursor(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    text: String,
    cursor: usize,
    overwrite: bool,
}

impl LineBuffer {
    /// Create an empty buffer in insert mode with the cursor at 0.
    pub fn new() -> Self {
        LineBuffer {
            text: String::new(),
            cursor: 0,
            overwrite: false,
        }
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The cursor offset in runes.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the buffer is in overwrite mode.
    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Length of the text in runes.
    pub fn len(&self) -> usize {
        unicode::rune_count(&self.text)
    }

    /// Whether the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole text, clamping the cursor into the new bounds.
    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.cursor = self.cursor.min(self.len());
    }

    /// Move the cursor, clamped to `[0, len]`.
    ///
    /// Returns `true` if the cursor actually moved.
    pub fn set_cursor(&mut self, offset: usize) -> bool {
        let clamped = offset.min(self.len());
        let moved = clamped != self.cursor;
        self.cursor = clamped;
        moved
    }

    /// Reset to empty text, cursor 0. The mode flag is left alone.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Splice `text` in at the cursor and advance past it.
    ///
    /// In insert mode the tail shifts right. In overwrite mode up to
    /// `rune_count(text)` existing runes after the cursor are replaced, and
    /// the buffer grows once the tail runs out. Either way the cursor ends
    /// up just after the inserted text.
    ///
    /// # Examples
    ///
    /// ```
    /// use linekit_core::buffer::LineBuffer;
    ///
    /// let mut buffer = LineBuffer::new();
    /// buffer.insert("abcdef");
    /// buffer.set_cursor(2);
    /// buffer.set_overwrite(Some(true));
    /// buffer.insert("XY");
    /// assert_eq!(buffer.text(), "abXYef");
    /// assert_eq!(buffer.cursor(), 4);
    /// ```
    pub fn insert(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let len = self.len();
        let inserted = unicode::rune_count(text);
        let head = unicode::rune_slice(&self.text, 0, self.cursor);
        let tail_from = if self.overwrite {
            (self.cursor + inserted).min(len)
        } else {
            self.cursor
        };
        let tail = unicode::rune_slice(&self.text, tail_from, len);
        self.text = format!("{head}{text}{tail}");
        self.cursor += inserted;
    }

    /// Remove the rune at the cursor.
    ///
    /// Returns `false` (and changes nothing) when the cursor is at the end
    /// of the line.
    pub fn delete_at(&mut self) -> bool {
        let len = self.len();
        if self.cursor >= len {
            return false;
        }
        let head = unicode::rune_slice(&self.text, 0, self.cursor);
        let tail = unicode::rune_slice(&self.text, self.cursor + 1, len);
        self.text = format!("{head}{tail}");
        true
    }

    /// Remove up to `count` runes immediately before the cursor.
    ///
    /// The count clamps to the cursor offset; the cursor moves back by the
    /// number of runes actually removed, which is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linekit_core::buffer::LineBuffer;
    ///
    /// let mut buffer = LineBuffer::new();
    /// buffer.insert("choice --halp");
    /// assert_eq!(buffer.delete_before(1), 1);
    /// assert_eq!(buffer.text(), "choice --hal");
    /// assert_eq!(buffer.cursor(), 12);
    /// ```
    pub fn delete_before(&mut self, count: usize) -> usize {
        let removed = count.min(self.cursor);
        if removed == 0 {
            return 0;
        }
        let len = self.len();
        let head = unicode::rune_slice(&self.text, 0, self.cursor - removed);
        let tail = unicode::rune_slice(&self.text, self.cursor, len);
        self.text = format!("{head}{tail}");
        self.cursor -= removed;
        removed
    }

    /// Remove everything from the cursor to the end of the line and return
    /// it. Returns an empty string when the cursor is already at the end.
    pub fn kill_to_end(&mut self) -> String {
        let len = self.len();
        let killed = unicode::rune_slice(&self.text, self.cursor, len).to_string();
        if !killed.is_empty() {
            self.text = unicode::rune_slice(&self.text, 0, self.cursor).to_string();
        }
        killed
    }

    /// Replace the runes in `start..end` with `text` and leave the cursor
    /// at the end of the replacement.
    ///
    /// Always splices in insert semantics, regardless of the overwrite
    /// flag; completion uses this to swap the word fragment for a match.
    pub fn replace(&mut self, start: usize, end: usize, text: &str) {
        let len = self.len();
        let start = start.min(len);
        let end = end.clamp(start, len);
        let head = unicode::rune_slice(&self.text, 0, start);
        let tail = unicode::rune_slice(&self.text, end, len);
        self.text = format!("{head}{text}{tail}");
        self.cursor = start + unicode::rune_count(text);
    }

    /// Set overwrite mode explicitly, or flip it when `mode` is `None`.
    ///
    /// Returns the mode now in effect.
    pub fn set_overwrite(&mut self, mode: Option<bool>) -> bool {
        self.overwrite = mode.unwrap_or(!self.overwrite);
        self.overwrite
    }

    /// Offset of the next space strictly after the cursor.
    pub fn next_space(&self) -> Option<usize> {
        self.text
            .chars()
            .enumerate()
            .skip(self.cursor + 1)
            .find(|&(_, ch)| ch == ' ')
            .map(|(offset, _)| offset)
    }

    /// Offset of the last space strictly before the cursor.
    pub fn prev_space(&self) -> Option<usize> {
        let mut last = None;
        for (offset, ch) in self.text.chars().take(self.cursor).enumerate() {
            if ch == ' ' {
                last = Some(offset);
            }
        }
        last
    }

    /// Start offset of the word fragment ending at the cursor: one past the
    /// last space before the cursor, or the beginning of the line.
    pub fn word_start(&self) -> usize {
        self.prev_space().map_or(0, |offset| offset + 1)
    }

    /// The word fragment between [`word_start`](Self::word_start) and the
    /// cursor. Used by completion as the prefix under completion.
    pub fn word_fragment(&self) -> &str {
        unicode::rune_slice(&self.text, self.word_start(), self.cursor)
    }
}
