// Shared helpers for driving a session the way an application would:
// through named commands and scripted key input, observed only via the
// recorded event stream.

// Each test binary compiles its own copy; not every binary uses every helper.
#![allow(dead_code)]

use linekit::prelude::*;

/// A session with an attached recorder, starting from an empty buffer.
pub fn recorded_session() -> (Session, EventRecorder) {
    let mut session = Session::new();
    let recorder = EventRecorder::attach(&mut session);
    (session, recorder)
}

/// Dispatch a command with no argument, panicking on engine errors.
pub fn run(session: &mut Session, command: &str) {
    session
        .dispatch(command, &Event::None)
        .unwrap_or_else(|err| panic!("{command}: {err}"));
}

/// Insert literal text through `self-insert`.
pub fn type_text(session: &mut Session, text: &str) {
    session
        .dispatch("self-insert", &Event::Text(text.to_string()))
        .unwrap_or_else(|err| panic!("self-insert: {err}"));
}

/// Type a line and accept it.
pub fn accept_line(session: &mut Session, text: &str) {
    type_text(session, text);
    run(session, "accept-line");
}
