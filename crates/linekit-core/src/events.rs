//! Synchronous named-event dispatch.
//!
//! The [`EventBus`] is the notification backbone of the engine: the editing
//! session publishes `change`, `move`, `accept-line`, and `completions`
//! events on it, and renderers or other observers subscribe by name.
//! Dispatch is fully synchronous: `trigger` invokes every handler before it
//! returns, in subscription order, with no queuing. A handler may itself
//! call `trigger` on the bus it receives; the nested chain runs depth-first
//! on the same stack and fully unwinds before the outer dispatch resumes.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Name of the event fired after every text mutation, carrying the new text.
pub const CHANGE: &str = "change";
/// Name of the event fired after every cursor movement, carrying the offset.
pub const MOVE: &str = "move";
/// Name of the event fired when a line is committed, carrying its text.
pub const ACCEPT_LINE: &str = "accept-line";
/// Name of the event fired for an ambiguous completion, carrying candidates.
pub const COMPLETIONS: &str = "completions";

/// Payload carried by a dispatched event or a command argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// No payload.
    None,
    /// Literal text: new buffer contents, inserted text, or a submitted line.
    Text(String),
    /// A cursor offset in runes.
    Cursor(usize),
    /// A repeat count, e.g. for `backward-delete-char`.
    Count(usize),
    /// An overwrite-mode request; `None` flips the current mode.
    Mode(Option<bool>),
    /// An ordered completion candidate list.
    Candidates(Vec<String>),
}

impl Event {
    /// The text payload, if this event carries one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Event::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The cursor payload, if this event carries one.
    pub fn cursor(&self) -> Option<usize> {
        match self {
            Event::Cursor(offset) => Some(*offset),
            _ => None,
        }
    }

    /// The candidate list payload, if this event carries one.
    pub fn candidates(&self) -> Option<&[String]> {
        match self {
            Event::Candidates(candidates) => Some(candidates),
            _ => None,
        }
    }
}

type Handler = Rc<RefCell<dyn FnMut(&mut EventBus, &Event)>>;

/// Synchronous publish/subscribe dispatcher keyed by event name.
///
/// Handlers are invoked in subscription order and are never deduplicated:
/// subscribing the same closure twice runs it twice. Handlers registered
/// while a dispatch is in flight take effect from the next `trigger` on.
///
/// # Examples
///
/// ```
/// use linekit_core::events::{Event, EventBus};
///
/// let mut bus = EventBus::new();
/// bus.subscribe("change", |_, event| {
///     assert_eq!(event.text(), Some("abc"));
/// });
/// bus.trigger("change", &Event::Text("abc".to_string()));
/// ```
#[derive(Default)]
pub struct EventBus {
    handlers: HashMap<String, Vec<Handler>>,
}

impl EventBus {
    /// Create a bus with no subscriptions.
    pub fn new() -> Self {
        EventBus {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for the named event.
    ///
    /// Registration order is invocation order. The handler receives the bus
    /// itself so it can trigger further events during dispatch.
    pub fn subscribe<F>(&mut self, name: &str, handler: F)
    where
        F: FnMut(&mut EventBus, &Event) + 'static,
    {
        self.handlers
            .entry(name.to_string())
            .or_default()
            .push(Rc::new(RefCell::new(handler)));
    }

    /// Synchronously invoke every handler subscribed to `name`.
    ///
    /// Dispatch is re-entrant: a handler that triggers another event runs
    /// that event's whole handler chain before it resumes. A handler that
    /// transitively re-triggers the event it is currently handling is
    /// skipped for that nested round rather than re-entered.
    pub fn trigger(&mut self, name: &str, event: &Event) {
        let Some(chain) = self.handlers.get(name).cloned() else {
            return;
        };
        for handler in chain {
            if let Ok(mut callback) = handler.try_borrow_mut() {
                (*callback)(self, event);
            }
        }
    }

    /// Number of handlers currently subscribed to `name`.
    pub fn subscriber_count(&self, name: &str) -> usize {
        self.handlers.get(name).map_or(0, Vec::len)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self
            .handlers
            .iter()
            .map(|(name, chain)| (name.as_str(), chain.len()))
            .collect();
        names.sort_unstable();
        f.debug_struct("EventBus").field("handlers", &names).finish()
    }
}
