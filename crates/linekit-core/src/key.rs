//! Logical key identities fed to the binding layer.
//!
//! [`Key`] names the keys the engine can bind; [`KeyInput`] is the raw
//! input event shape the embedding application produces: a key identity
//! plus the literal character, if the key carries one. How device-specific
//! key codes map onto these names is the input device's concern, not the
//! engine's.

/// A logical key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Navigation
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    // Editing
    Backspace,
    Delete,
    Insert,
    Enter,
    Tab,

    // Emacs-style control combinations
    ControlA,
    ControlB,
    ControlD,
    ControlE,
    ControlF,
    ControlK,
    ControlN,
    ControlP,
    ControlY,

    /// A key with no binding of its own; meaningful only through the
    /// literal text it carries.
    Char,
    /// A key the input device could not classify.
    Unknown,
}

/// A raw input event: key identity plus optional literal character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    /// The logical key that was pressed.
    pub key: Key,
    /// The literal text this key produces, for printable input.
    pub text: Option<String>,
}

impl KeyInput {
    /// An input event for a key with no literal text.
    pub fn key(key: Key) -> Self {
        KeyInput { key, text: None }
    }

    /// An input event for a printable character.
    ///
    /// # Examples
    ///
    /// ```
    /// use linekit_core::key::{Key, KeyInput};
    ///
    /// let input = KeyInput::char('c');
    /// assert_eq!(input.key, Key::Char);
    /// assert_eq!(input.text.as_deref(), Some("c"));
    /// ```
    pub fn char(ch: char) -> Self {
        KeyInput {
            key: Key::Char,
            text: Some(ch.to_string()),
        }
    }

    /// An input event carrying a whole string, e.g. a paste.
    pub fn text(text: impl Into<String>) -> Self {
        KeyInput {
            key: Key::Char,
            text: Some(text.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        assert_eq!(KeyInput::key(Key::Enter).key, Key::Enter);
        assert_eq!(KeyInput::key(Key::Enter).text, None);
        assert_eq!(KeyInput::char('x').text.as_deref(), Some("x"));
        assert_eq!(KeyInput::text("paste").text.as_deref(), Some("paste"));
    }
}
