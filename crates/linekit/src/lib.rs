//! # Linekit: Line-Editing Toolkit
//!
//! Linekit is a library for building readline-style interactive prompts. The
//! editing engine keeps a single-line buffer with an addressable cursor, a
//! bounded command history with prefix search, a kill/yank slot, and a
//! pluggable completion protocol, and reports everything it does through
//! synchronous events, so any rendering surface can sit on top.
//!
//! ## Quick Start
//!
//! ```rust
//! use linekit::prelude::*;
//!
//! let mut session = Session::new();
//! session.set_provider(StaticCandidates::from_strings(vec![
//!     "help", "quit", "status",
//! ]));
//!
//! for ch in "hel".chars() {
//!     session.feed(&KeyInput::char(ch)).unwrap();
//! }
//! session.feed(&KeyInput::key(Key::Tab)).unwrap();
//! assert_eq!(session.buffer().text(), "help");
//! ```
//!
//! ## Architecture
//!
//! Linekit is organized into two layers:
//!
//! - **Editing engine** (`linekit-core`): line buffer, history, kill ring,
//!   completion protocol, event bus, key bindings
//! - **High-level API** (`linekit`): ready-made completion providers and
//!   event capture utilities - this crate
//!
//! The engine performs no I/O. An input device feeds [`KeyInput`] events in;
//! a renderer subscribes to `change`, `move`, `accept-line`, and
//! `completions` events coming out.

// Re-export the editing engine from linekit-core
pub use linekit_core::{
    // Session and configuration
    Session, SessionConfig,
    // Editing state
    LineBuffer, HistoryLog, KillRing,
    // Input handling
    Binding, Key, KeyInput,
    // Event dispatch
    Event, EventBus, ACCEPT_LINE, CHANGE, COMPLETIONS, MOVE,
    // Completion contract
    CandidateProvider,
    // Error handling
    EngineError, EngineResult,
    // Unicode utilities
    unicode::{display_width, rune_count, rune_slice},
};

// High-level components (defined in this crate)
pub mod completion;
pub mod recording;

// Re-export high-level components for convenience
pub use completion::StaticCandidates;
pub use recording::EventRecorder;

/// Convenient re-exports for common usage patterns
///
/// Import everything you need with `use linekit::prelude::*;`
pub mod prelude {
    // Session and editing state
    pub use crate::{HistoryLog, KillRing, LineBuffer, Session, SessionConfig};

    // Input handling
    pub use crate::{Binding, Key, KeyInput};

    // Event dispatch
    pub use crate::{Event, EventBus, ACCEPT_LINE, CHANGE, COMPLETIONS, MOVE};

    // Completion system
    pub use crate::{CandidateProvider, StaticCandidates};

    // Event capture
    pub use crate::EventRecorder;

    // Error handling
    pub use crate::{EngineError, EngineResult};

    // Unicode utilities (commonly used for text processing)
    pub use crate::{display_width, rune_count, rune_slice};

    /// Result alias for ergonomic error handling
    pub type Result<T> = crate::EngineResult<T>;
}
