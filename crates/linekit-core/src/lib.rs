//! Line-Editing Engine
//!
//! This crate provides the core of a readline-style line editor: an editable
//! buffer with an addressable cursor, a command-history log with prefix
//! search and an uncommitted-edit stash, a kill/yank slot, and a completion
//! protocol, all driven through synchronous named-event dispatch so any
//! rendering surface can sit on top. The crate performs no I/O of its own:
//! input devices feed it logical key events and renderers observe it through
//! the event bus.

pub mod binding;
pub mod buffer;
pub mod complete;
pub mod error;
pub mod events;
pub mod history;
pub mod key;
pub mod kill;
pub mod session;
pub mod unicode;

// Re-export commonly used types for convenience
pub use binding::Binding;
pub use buffer::LineBuffer;
pub use complete::CandidateProvider;
pub use error::{EngineError, EngineResult};
pub use events::{Event, EventBus, ACCEPT_LINE, CHANGE, COMPLETIONS, MOVE};
pub use history::HistoryLog;
pub use key::{Key, KeyInput};
pub use kill::KillRing;
pub use session::{Session, SessionConfig};
pub use unicode::{byte_index, char_at, display_width, rune_count, rune_slice};
