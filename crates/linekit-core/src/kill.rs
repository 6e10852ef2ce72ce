//! Kill/yank storage.
//!
//! A single-slot store for the most recently excised span of text. Each
//! kill overwrites the previous slot; `yank` reinserts the stored text at
//! the cursor. Multi-entry ring semantics with yank rotation are a possible
//! extension but are not assumed here.

/// Holds the most recently killed span of text.
#[derive(Debug, Clone, Default)]
pub struct KillRing {
    slot: Option<String>,
}

impl KillRing {
    /// Create an empty kill ring.
    pub fn new() -> Self {
        KillRing { slot: None }
    }

    /// Store a killed span, replacing any previous one.
    ///
    /// An empty span is ignored so a no-op kill cannot clobber the slot.
    pub fn store(&mut self, text: String) {
        if !text.is_empty() {
            self.slot = Some(text);
        }
    }

    /// The stored text, if any.
    pub fn text(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    /// Whether nothing has been killed yet.
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
