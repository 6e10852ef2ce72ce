//! Event capture for tests and scripted sessions.
//!
//! [`EventRecorder`] subscribes to every event a session publishes and keeps
//! them in dispatch order. Renderers are the production consumers of these
//! events; the recorder stands in for one when there is no screen, in
//! integration tests and in scripted demos.

use std::cell::RefCell;
use std::rc::Rc;

use linekit_core::{Event, Session, ACCEPT_LINE, CHANGE, COMPLETIONS, MOVE};

/// Records every event a session fires, in dispatch order.
///
/// Cloning a recorder yields a handle onto the same capture log.
///
/// # Examples
///
/// ```
/// use linekit::recording::EventRecorder;
/// use linekit::{Event, Session};
///
/// let mut session = Session::new();
/// let recorder = EventRecorder::attach(&mut session);
/// session.dispatch("self-insert", &Event::Text("ab".to_string())).unwrap();
/// assert_eq!(recorder.names(), ["change", "move"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    log: Rc<RefCell<Vec<(String, Event)>>>,
}

impl EventRecorder {
    /// Create a recorder and subscribe it to all four session events.
    pub fn attach(session: &mut Session) -> Self {
        let recorder = EventRecorder {
            log: Rc::new(RefCell::new(Vec::new())),
        };
        for name in [CHANGE, MOVE, ACCEPT_LINE, COMPLETIONS] {
            let log = Rc::clone(&recorder.log);
            session.subscribe(name, move |_, event| {
                log.borrow_mut().push((name.to_string(), event.clone()));
            });
        }
        recorder
    }

    /// Everything captured so far, in dispatch order.
    pub fn events(&self) -> Vec<(String, Event)> {
        self.log.borrow().clone()
    }

    /// Just the event names, in dispatch order.
    pub fn names(&self) -> Vec<String> {
        self.log.borrow().iter().map(|(name, _)| name.clone()).collect()
    }

    /// Payloads of every capture of the named event.
    pub fn payloads(&self, name: &str) -> Vec<Event> {
        self.log
            .borrow()
            .iter()
            .filter(|(captured, _)| captured == name)
            .map(|(_, event)| event.clone())
            .collect()
    }

    /// Number of captures of the named event.
    pub fn count(&self, name: &str) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|(captured, _)| captured == name)
            .count()
    }

    /// Forget everything captured so far.
    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_in_dispatch_order_and_clears() {
        let mut session = Session::new();
        let recorder = EventRecorder::attach(&mut session);

        session
            .dispatch("self-insert", &Event::Text("hi".to_string()))
            .unwrap();
        assert_eq!(recorder.names(), [CHANGE, MOVE]);
        assert_eq!(
            recorder.payloads(CHANGE),
            [Event::Text("hi".to_string())]
        );
        assert_eq!(recorder.count(ACCEPT_LINE), 0);

        recorder.clear();
        assert!(recorder.events().is_empty());
    }
}
