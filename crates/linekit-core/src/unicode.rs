//! Unicode helpers for cursor arithmetic.
//!
//! Every cursor offset in the engine is a rune index (a count of Unicode
//! scalar values), never a byte index. These helpers convert between the two
//! and slice text without panicking on character boundaries. `display_width`
//! is provided for renderers that need to place a visual cursor; the engine
//! itself never measures display columns.

use unicode_width::UnicodeWidthStr;

/// Count the Unicode scalar values (runes) in a string.
///
/// # Examples
///
/// ```
/// use linekit_core::unicode::rune_count;
///
/// assert_eq!(rune_count("choice"), 6);
/// assert_eq!(rune_count("señal"), 5);
/// assert_eq!(rune_count("選択"), 2);
/// ```
pub fn rune_count(s: &str) -> usize {
    s.chars().count()
}

/// Slice a string by rune indices, `start` inclusive and `end` exclusive.
///
/// Out-of-range indices clamp to the end of the string and an inverted
/// range yields an empty slice.
///
/// # Examples
///
/// ```
/// use linekit_core::unicode::rune_slice;
///
/// assert_eq!(rune_slice("choice --halp", 7, 13), "--halp");
/// assert_eq!(rune_slice("señal", 2, 4), "ña");
/// assert_eq!(rune_slice("abc", 2, 1), "");
/// ```
pub fn rune_slice(s: &str, start: usize, end: usize) -> &str {
    if end <= start {
        return "";
    }
    let begin = byte_index(s, start);
    let finish = byte_index(s, end);
    &s[begin..finish]
}

/// Get the character at a rune index, or `None` past the end.
///
/// # Examples
///
/// ```
/// use linekit_core::unicode::char_at;
///
/// assert_eq!(char_at("señal", 2), Some('ñ'));
/// assert_eq!(char_at("abc", 3), None);
/// ```
pub fn char_at(s: &str, index: usize) -> Option<char> {
    s.chars().nth(index)
}

/// Convert a rune index to the byte offset where that rune starts.
///
/// Indices past the end map to `s.len()`.
///
/// # Examples
///
/// ```
/// use linekit_core::unicode::byte_index;
///
/// assert_eq!(byte_index("abc", 2), 2);
/// assert_eq!(byte_index("選択", 1), 3);
/// assert_eq!(byte_index("abc", 10), 3);
/// ```
pub fn byte_index(s: &str, rune_index: usize) -> usize {
    s.char_indices()
        .nth(rune_index)
        .map(|(offset, _)| offset)
        .unwrap_or(s.len())
}

/// Display width of a string in terminal columns.
///
/// CJK characters and most emoji occupy two columns. Renderers can use this
/// to turn a rune-index cursor into a column position.
///
/// # Examples
///
/// ```
/// use linekit_core::unicode::display_width;
///
/// assert_eq!(display_width("abc"), 3);
/// assert_eq!(display_width("選択"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    s.width()
}
