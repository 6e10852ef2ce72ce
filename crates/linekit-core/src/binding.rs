//! The binding layer: raw input to command names.
//!
//! [`Binding`] is one declarative table from logical [`Key`]s to command
//! names. It is the only piece of the engine that looks at input events;
//! everything downstream works in command names and payloads. Input that
//! resolves to nothing (an unbound key carrying no literal text) is
//! dropped silently, with a trace log and no event.

use std::collections::HashMap;

use crate::events::Event;
use crate::key::{Key, KeyInput};

/// Declarative mapping from logical keys to command names.
///
/// # Examples
///
/// ```
/// use linekit_core::binding::Binding;
/// use linekit_core::key::{Key, KeyInput};
///
/// let binding = Binding::default();
/// let (command, _) = binding.resolve(&KeyInput::key(Key::Enter)).unwrap();
/// assert_eq!(command, "accept-line");
/// ```
#[derive(Debug, Clone)]
pub struct Binding {
    table: HashMap<Key, String>,
}

impl Binding {
    /// A binding with an empty table; printable input still self-inserts.
    pub fn empty() -> Self {
        Binding {
            table: HashMap::new(),
        }
    }

    /// Bind a key to a command name, replacing any previous binding.
    pub fn bind(&mut self, key: Key, command: &str) {
        self.table.insert(key, command.to_string());
    }

    /// Remove a binding. Returns `true` if one existed.
    pub fn unbind(&mut self, key: Key) -> bool {
        self.table.remove(&key).is_some()
    }

    /// The command name bound to a key, if any.
    pub fn command_for(&self, key: Key) -> Option<&str> {
        self.table.get(&key).map(String::as_str)
    }

    /// Resolve a raw input event to a command name and argument.
    ///
    /// Bound keys win over literal text; an unbound key with literal text
    /// becomes `self-insert`; anything else is dropped (`None`).
    pub fn resolve(&self, input: &KeyInput) -> Option<(String, Event)> {
        if let Some(command) = self.table.get(&input.key) {
            return Some((command.clone(), Event::None));
        }
        match &input.text {
            Some(text) if !text.is_empty() => {
                Some(("self-insert".to_string(), Event::Text(text.clone())))
            }
            _ => {
                log::trace!("dropping unbound input: {:?}", input.key);
                None
            }
        }
    }
}

impl Default for Binding {
    /// The default table: arrows, Home/End, PageUp/PageDown history search,
    /// editing keys, and the Emacs-style control combinations.
    fn default() -> Self {
        let mut binding = Binding::empty();
        for (key, command) in [
            (Key::Home, "beginning-of-line"),
            (Key::End, "end-of-line"),
            (Key::Left, "backward-char"),
            (Key::Right, "forward-char"),
            (Key::Up, "previous-history"),
            (Key::Down, "next-history"),
            (Key::PageUp, "history-search-backward"),
            (Key::PageDown, "history-search-forward"),
            (Key::Backspace, "backward-delete-char"),
            (Key::Delete, "delete-char"),
            (Key::Insert, "overwrite-mode"),
            (Key::Enter, "accept-line"),
            (Key::Tab, "complete"),
            (Key::ControlA, "beginning-of-line"),
            (Key::ControlE, "end-of-line"),
            (Key::ControlB, "backward-char"),
            (Key::ControlF, "forward-char"),
            (Key::ControlP, "previous-history"),
            (Key::ControlN, "next-history"),
            (Key::ControlD, "forward-backward-delete-char"),
            (Key::ControlK, "kill-line"),
            (Key::ControlY, "yank"),
        ] {
            binding.bind(key, command);
        }
        binding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_covers_the_editing_keys() {
        let binding = Binding::default();
        assert_eq!(binding.command_for(Key::Backspace), Some("backward-delete-char"));
        assert_eq!(binding.command_for(Key::PageUp), Some("history-search-backward"));
        assert_eq!(binding.command_for(Key::ControlY), Some("yank"));
        assert_eq!(binding.command_for(Key::Char), None);
    }

    #[test]
    fn printable_text_resolves_to_self_insert() {
        let binding = Binding::default();
        let (command, arg) = binding.resolve(&KeyInput::char('x')).unwrap();
        assert_eq!(command, "self-insert");
        assert_eq!(arg, Event::Text("x".to_string()));
    }

    #[test]
    fn bound_keys_win_over_literal_text() {
        let binding = Binding::default();
        let input = KeyInput {
            key: Key::Enter,
            text: Some("\r".to_string()),
        };
        let (command, arg) = binding.resolve(&input).unwrap();
        assert_eq!(command, "accept-line");
        assert_eq!(arg, Event::None);
    }

    #[test]
    fn unbound_input_without_text_is_dropped() {
        let binding = Binding::default();
        assert!(binding.resolve(&KeyInput::key(Key::Unknown)).is_none());
        let empty_text = KeyInput {
            key: Key::Unknown,
            text: Some(String::new()),
        };
        assert!(binding.resolve(&empty_text).is_none());
    }

    #[test]
    fn rebinding_replaces_and_unbinding_restores_drop_behavior() {
        let mut binding = Binding::default();
        binding.bind(Key::ControlD, "delete-char");
        assert_eq!(binding.command_for(Key::ControlD), Some("delete-char"));
        assert!(binding.unbind(Key::ControlD));
        assert!(!binding.unbind(Key::ControlD));
        assert!(binding.resolve(&KeyInput::key(Key::ControlD)).is_none());
    }
}
