//! The editing session: command dispatch over the engine's state.
//!
//! A [`Session`] owns one [`LineBuffer`], one [`HistoryLog`], one
//! [`KillRing`], one [`EventBus`], and one [`Binding`], and routes named
//! commands to them. Raw input goes through [`Session::feed`]; resolved
//! commands (and anything an embedder wants to invoke directly) go through
//! [`Session::dispatch`]. Commands may dispatch other commands; the chain
//! runs depth-first on the same stack, mirroring how event dispatch works.
//!
//! Observers see the session only through the bus: `change` after every
//! text mutation, `move` after every cursor movement, `accept-line` when a
//! line is committed, `completions` when completion is ambiguous. Boundary
//! conditions are silent no-ops and emit nothing.

use crate::binding::Binding;
use crate::buffer::LineBuffer;
use crate::complete::{self, CandidateProvider};
use crate::error::{EngineError, EngineResult};
use crate::events::{Event, EventBus, ACCEPT_LINE, CHANGE, COMPLETIONS, MOVE};
use crate::history::HistoryLog;
use crate::key::KeyInput;
use crate::kill::KillRing;
use crate::unicode;

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Maximum number of committed history entries kept before the oldest
    /// are evicted.
    pub max_history: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig { max_history: 50 }
    }
}

impl SessionConfig {
    /// Reject configurations the engine cannot honor.
    pub fn validate(&self) -> EngineResult<()> {
        if self.max_history == 0 {
            return Err(EngineError::invalid_config(
                "history bound must be at least 1",
            ));
        }
        Ok(())
    }
}

/// A single-user line-editing session.
///
/// # Examples
///
/// ```
/// use linekit_core::session::Session;
/// use linekit_core::events::Event;
///
/// let mut session = Session::new();
/// session
///     .dispatch("self-insert", &Event::Text("choice --halp".to_string()))
///     .unwrap();
/// assert_eq!(session.buffer().text(), "choice --halp");
/// assert_eq!(session.buffer().cursor(), 13);
/// ```
pub struct Session {
    buffer: LineBuffer,
    history: HistoryLog,
    kill: KillRing,
    events: EventBus,
    binding: Binding,
    provider: Option<Box<dyn CandidateProvider>>,
}

impl Session {
    /// Create a session with the default configuration and binding table.
    pub fn new() -> Self {
        // The default configuration always validates.
        Session::build(SessionConfig::default())
    }

    /// Create a session with an explicit configuration.
    pub fn with_config(config: SessionConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Session::build(config))
    }

    fn build(config: SessionConfig) -> Self {
        Session {
            buffer: LineBuffer::new(),
            history: HistoryLog::new(config.max_history),
            kill: KillRing::new(),
            events: EventBus::new(),
            binding: Binding::default(),
            provider: None,
        }
    }

    /// The line buffer.
    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// The history log.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// The kill ring.
    pub fn kill_ring(&self) -> &KillRing {
        &self.kill
    }

    /// The binding table, for rebinding keys.
    pub fn binding_mut(&mut self) -> &mut Binding {
        &mut self.binding
    }

    /// Install the completion candidate provider.
    ///
    /// Without one, `complete` is a silent no-op.
    pub fn set_provider(&mut self, provider: impl CandidateProvider + 'static) {
        self.provider = Some(Box::new(provider));
    }

    /// Subscribe an observer to a named event on the session's bus.
    pub fn subscribe<F>(&mut self, name: &str, handler: F)
    where
        F: FnMut(&mut EventBus, &Event) + 'static,
    {
        self.events.subscribe(name, handler);
    }

    /// Feed one raw input event through the binding layer.
    ///
    /// Input that resolves to no command is dropped silently.
    pub fn feed(&mut self, input: &KeyInput) -> EngineResult<()> {
        match self.binding.resolve(input) {
            Some((command, arg)) => self.dispatch(&command, &arg),
            None => Ok(()),
        }
    }

    /// Drop all editing state: buffer, history, and kill ring.
    ///
    /// Nothing is committed. Bindings, subscriptions, and the candidate
    /// provider survive, and observers see the cleared line.
    pub fn reset(&mut self) {
        let at_start = self.buffer.cursor() == 0;
        let was_empty = self.buffer.is_empty();
        self.buffer.clear();
        self.history = HistoryLog::new(self.history.max_entries());
        self.kill = KillRing::new();
        if !was_empty {
            self.emit_change();
        }
        if !at_start {
            self.emit_move();
        }
    }

    /// Execute a named command.
    ///
    /// Boundary conditions (cursor at either end, empty history, empty kill
    /// slot, no completion match) are silent no-ops. The only errors are an
    /// unknown command name, or a candidate provider returning text the
    /// buffer cannot hold.
    pub fn dispatch(&mut self, command: &str, arg: &Event) -> EngineResult<()> {
        log::debug!("dispatch {command}");
        match command {
            // Move
            "beginning-of-line" => self.move_cursor(0),
            "end-of-line" => self.move_cursor(self.buffer.len()),
            "forward-char" => self.move_cursor(self.buffer.cursor() + 1),
            "backward-char" => {
                let cursor = self.buffer.cursor();
                if cursor > 0 {
                    self.move_cursor(cursor - 1);
                }
            }
            "forward-word" => {
                let target = self.buffer.next_space().unwrap_or(self.buffer.len());
                self.move_cursor(target);
            }
            "backward-word" => {
                let target = self.buffer.prev_space().unwrap_or(0);
                self.move_cursor(target);
            }

            // Edit
            "self-insert" => {
                if let Some(text) = arg.text() {
                    if !text.is_empty() {
                        let text = text.to_string();
                        self.buffer.insert(&text);
                        self.emit_change();
                        self.emit_move();
                    }
                }
            }
            "delete-char" => {
                if self.buffer.delete_at() {
                    self.emit_change();
                }
            }
            "backward-delete-char" => {
                let count = match arg {
                    Event::Count(count) => *count,
                    _ => 1,
                };
                if self.buffer.delete_before(count) > 0 {
                    self.emit_change();
                    self.emit_move();
                }
            }
            "forward-backward-delete-char" => {
                if self.buffer.cursor() == self.buffer.len() {
                    self.dispatch("backward-delete-char", &Event::Count(1))?;
                } else {
                    self.dispatch("delete-char", &Event::None)?;
                }
            }
            "overwrite-mode" => {
                let mode = match arg {
                    Event::Mode(mode) => *mode,
                    _ => None,
                };
                self.buffer.set_overwrite(mode);
            }

            // History
            "previous-history" => {
                if let Some(loaded) = self.history.previous(self.buffer.text()) {
                    self.load_line(loaded);
                }
            }
            "next-history" => {
                if let Some(loaded) = self.history.next(self.buffer.text()) {
                    self.load_line(loaded);
                }
            }
            "beginning-of-history" => {
                if let Some(loaded) = self.history.first(self.buffer.text()) {
                    self.load_line(loaded);
                }
            }
            "end-of-history" => {
                if let Some(loaded) = self.history.last(self.buffer.text()) {
                    self.load_line(loaded);
                }
            }
            "history-search-backward" => {
                if let Some(target) = self.history.search_backward(&self.search_key()) {
                    self.jump_preserving_cursor(target);
                }
            }
            "history-search-forward" => {
                if let Some(target) = self.history.search_forward(&self.search_key()) {
                    self.jump_preserving_cursor(target);
                }
            }
            "accept-line" => {
                self.dispatch("end-of-line", &Event::None)?;
                let submitted = self.history.accept(self.buffer.text());
                self.events.trigger(ACCEPT_LINE, &Event::Text(submitted));
                let at_start = self.buffer.cursor() == 0;
                self.buffer.clear();
                self.emit_change();
                if !at_start {
                    self.emit_move();
                }
            }

            // Kill
            "kill-line" => {
                let killed = self.buffer.kill_to_end();
                if !killed.is_empty() {
                    self.kill.store(killed);
                    self.emit_change();
                }
            }
            "yank" => {
                if let Some(text) = self.kill.text() {
                    let text = text.to_string();
                    self.dispatch("self-insert", &Event::Text(text))?;
                }
            }

            // Completion
            "complete" => self.complete()?,

            _ => return Err(EngineError::unknown_command(command)),
        }
        Ok(())
    }

    /// Move the cursor and emit `move` if it actually moved.
    fn move_cursor(&mut self, offset: usize) {
        if self.buffer.set_cursor(offset) {
            self.emit_move();
        }
    }

    /// Fire `change` with the new text, keeping the live history slot in
    /// sync with the buffer.
    fn emit_change(&mut self) {
        self.history.record_live(self.buffer.text());
        self.events
            .trigger(CHANGE, &Event::Text(self.buffer.text().to_string()));
    }

    fn emit_move(&mut self) {
        self.events
            .trigger(MOVE, &Event::Cursor(self.buffer.cursor()));
    }

    /// Load a history line into the buffer, cursor at the end of it.
    fn load_line(&mut self, text: String) {
        let before = self.buffer.cursor();
        self.buffer.set_text(text);
        let end = self.buffer.len();
        self.buffer.set_cursor(end);
        self.events
            .trigger(CHANGE, &Event::Text(self.buffer.text().to_string()));
        if self.buffer.cursor() != before {
            self.emit_move();
        }
    }

    /// The prefix-search key: everything from the start of the line to the
    /// cursor.
    fn search_key(&self) -> String {
        unicode::rune_slice(self.buffer.text(), 0, self.buffer.cursor()).to_string()
    }

    /// Jump to a searched history entry, keeping the cursor where it is so
    /// repeated searches refine from the same prefix.
    fn jump_preserving_cursor(&mut self, target: usize) {
        let before = self.buffer.cursor();
        if let Some(loaded) = self.history.jump(target, self.buffer.text()) {
            self.buffer.set_text(loaded);
            self.events
                .trigger(CHANGE, &Event::Text(self.buffer.text().to_string()));
            // set_text clamps; only a shorter line moves the cursor.
            if self.buffer.cursor() != before {
                self.emit_move();
            }
        }
    }

    fn complete(&mut self) -> EngineResult<()> {
        let Some(provider) = self.provider.as_deref() else {
            return Ok(());
        };
        let fragment = self.buffer.word_fragment().to_string();
        let candidates = provider.candidates(&fragment);
        for candidate in &candidates {
            complete::validate_candidate(candidate)?;
        }
        let mut matches = complete::prefix_matches(&fragment, candidates);
        match matches.len() {
            0 => {}
            1 => {
                let replacement = matches.remove(0);
                let start = self.buffer.word_start();
                let before = self.buffer.cursor();
                self.buffer.replace(start, before, &replacement);
                self.emit_change();
                if self.buffer.cursor() != before {
                    self.emit_move();
                }
            }
            _ => {
                self.events.trigger(COMPLETIONS, &Event::Candidates(matches));
            }
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("buffer", &self.buffer)
            .field("history", &self.history)
            .field("kill", &self.kill)
            .field("events", &self.events)
            .field("provider", &self.provider.is_some())
            .finish()
    }
}
