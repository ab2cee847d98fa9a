//! Input buffer operations.
//!
//! All functions are total. Lengths count grapheme clusters, so a label such
//! as `"é"` written with a combining accent counts as one character and is
//! removed by a single delete.

use unicode_segmentation::UnicodeSegmentation;

use crate::config::InputMode;

/// Number of user-perceived characters in `text`.
pub fn char_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// `text` followed by `label`, unless `text` already holds `max_length`
/// characters.
pub fn append(text: &str, label: &str, max_length: usize) -> String {
    if char_len(text) < max_length {
        let mut out = String::with_capacity(text.len() + label.len());
        out.push_str(text);
        out.push_str(label);
        out
    } else {
        text.to_owned()
    }
}

/// `text` without its last character.
pub fn delete(text: &str) -> String {
    match text.grapheme_indices(true).next_back() {
        Some((start, _)) => text[..start].to_owned(),
        None => String::new(),
    }
}

/// The empty text.
pub fn clear() -> String {
    String::new()
}

/// What the input field shows for `text`.
pub fn masked_display(text: &str, mode: InputMode) -> String {
    match mode {
        InputMode::Normal => text.to_owned(),
        InputMode::Password => mode.mask_character().repeat(char_len(text)),
    }
}

/// Owned input text with a length limit.
///
/// Mutators report whether the text changed so callers only emit feedback
/// for edits that took effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    max_length: usize,
}

impl InputBuffer {
    /// Empty buffer accepting up to `max_length` characters.
    pub fn new(max_length: usize) -> Self {
        Self { text: String::new(), max_length }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length limit.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Current length in characters.
    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append `label` if there is room.
    pub fn append(&mut self, label: &str) -> bool {
        if self.len() >= self.max_length {
            return false;
        }
        self.text.push_str(label);
        true
    }

    /// Remove the last character.
    pub fn delete(&mut self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        self.text = delete(&self.text);
        true
    }

    /// Remove everything.
    pub fn clear(&mut self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        self.text.clear();
        true
    }

    /// Take the text, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    /// Display string for `mode`.
    pub fn display(&self, mode: InputMode) -> String {
        masked_display(&self.text, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_within_limit() {
        assert_eq!(append("12", "3", 20), "123");
    }

    #[test]
    fn append_at_limit_is_noop() {
        assert_eq!(append("123", "4", 3), "123");
    }

    #[test]
    fn delete_removes_last() {
        assert_eq!(delete("123"), "12");
    }

    #[test]
    fn delete_empty_is_noop() {
        assert_eq!(delete(""), "");
    }

    #[test]
    fn delete_after_clear_is_noop() {
        assert_eq!(delete(&clear()), "");
    }

    #[test]
    fn delete_removes_whole_grapheme() {
        assert_eq!(delete("ae\u{301}"), "a");
        assert_eq!(char_len("ae\u{301}"), 2);
    }

    #[test]
    fn password_mode_masks_each_character() {
        assert_eq!(masked_display("123", InputMode::Password), "•••");
        assert_eq!(masked_display("123", InputMode::Normal), "123");
        assert_eq!(masked_display("", InputMode::Password), "");
    }

    #[test]
    fn buffer_reports_changes() {
        let mut buffer = InputBuffer::new(2);
        assert!(!buffer.delete());
        assert!(!buffer.clear());

        assert!(buffer.append("1"));
        assert!(buffer.append("2"));
        assert!(!buffer.append("3"));
        assert_eq!(buffer.text(), "12");

        assert!(buffer.delete());
        assert_eq!(buffer.text(), "1");
        assert!(buffer.clear());
        assert!(buffer.is_empty());
    }

    #[test]
    fn take_empties_buffer() {
        let mut buffer = InputBuffer::new(5);
        buffer.append("42");
        assert_eq!(buffer.take(), "42");
        assert!(buffer.is_empty());
    }
}
