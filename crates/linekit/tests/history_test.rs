// History navigation, stash semantics, prefix search, and the accept-line
// event contract.

mod common;

use common::*;
use linekit::prelude::*;

#[test]
fn accept_emits_the_line_before_the_buffer_clears() {
    let (mut session, recorder) = recorded_session();
    type_text(&mut session, "make test");
    recorder.clear();

    run(&mut session, "accept-line");

    assert_eq!(
        recorder.events(),
        [
            (ACCEPT_LINE.to_string(), Event::Text("make test".to_string())),
            (CHANGE.to_string(), Event::Text(String::new())),
            (MOVE.to_string(), Event::Cursor(0)),
        ]
    );
    assert_eq!(session.buffer().text(), "");
    assert_eq!(session.buffer().cursor(), 0);
}

#[test]
fn n_accepts_then_n_round_trips_return_to_the_empty_top() {
    let (mut session, _) = recorded_session();
    let lines = ["one", "two", "three"];
    for line in lines {
        accept_line(&mut session, line);
    }

    for _ in lines {
        run(&mut session, "previous-history");
    }
    assert_eq!(session.buffer().text(), "one");

    for _ in lines {
        run(&mut session, "next-history");
    }
    assert_eq!(session.buffer().text(), "");
    assert!(session.history().is_at_top());
}

#[test]
fn edits_made_while_browsing_are_kept() {
    let (mut session, _) = recorded_session();
    accept_line(&mut session, "a");
    accept_line(&mut session, "b");

    run(&mut session, "previous-history");
    run(&mut session, "previous-history");
    assert_eq!(session.buffer().text(), "a");

    type_text(&mut session, "x");
    run(&mut session, "next-history");
    assert_eq!(session.buffer().text(), "b");
    run(&mut session, "previous-history");
    assert_eq!(session.buffer().text(), "ax");
}

#[test]
fn half_typed_line_survives_a_history_detour_and_accept() {
    let (mut session, _) = recorded_session();
    accept_line(&mut session, "old");

    type_text(&mut session, "in progress");
    run(&mut session, "previous-history");
    assert_eq!(session.buffer().text(), "old");

    // Accept away from the top: the stashed half-typed line is what gets
    // committed, and the browsed entry keeps any edits.
    let recorder = EventRecorder::attach(&mut session);
    run(&mut session, "accept-line");
    assert_eq!(
        recorder.payloads(ACCEPT_LINE),
        [Event::Text("in progress".to_string())]
    );
    assert_eq!(
        session.history().entries(),
        ["old", "in progress", ""]
    );
}

#[test]
fn navigation_at_the_ends_is_a_silent_no_op() {
    let (mut session, recorder) = recorded_session();
    accept_line(&mut session, "only");
    recorder.clear();

    run(&mut session, "next-history");
    assert!(recorder.events().is_empty());

    run(&mut session, "previous-history");
    recorder.clear();
    run(&mut session, "previous-history");
    assert!(recorder.events().is_empty());
    assert_eq!(session.buffer().text(), "only");
}

#[test]
fn beginning_and_end_of_history_jump_across_the_log() {
    let (mut session, _) = recorded_session();
    for line in ["first", "second", "third"] {
        accept_line(&mut session, line);
    }

    run(&mut session, "beginning-of-history");
    assert_eq!(session.buffer().text(), "first");
    assert_eq!(session.buffer().cursor(), 5);

    run(&mut session, "end-of-history");
    assert_eq!(session.buffer().text(), "");
    assert!(session.history().is_at_top());
}

#[test]
fn prefix_search_walks_matching_entries_only() {
    let (mut session, _) = recorded_session();
    for line in ["choice --help", "make test", "choice --version", "ls"] {
        accept_line(&mut session, line);
    }

    type_text(&mut session, "choice");
    run(&mut session, "history-search-backward");
    assert_eq!(session.buffer().text(), "choice --version");
    assert_eq!(session.buffer().cursor(), 6);

    run(&mut session, "history-search-backward");
    assert_eq!(session.buffer().text(), "choice --help");
    assert_eq!(session.buffer().cursor(), 6);

    run(&mut session, "history-search-forward");
    assert_eq!(session.buffer().text(), "choice --version");
}

#[test]
fn search_with_no_match_changes_nothing() {
    let (mut session, recorder) = recorded_session();
    accept_line(&mut session, "ls");
    type_text(&mut session, "choice");
    recorder.clear();

    run(&mut session, "history-search-backward");
    run(&mut session, "history-search-forward");
    assert!(recorder.events().is_empty());
    assert_eq!(session.buffer().text(), "choice");
}

#[test]
fn history_is_bounded_by_the_configured_maximum() {
    let mut session = Session::with_config(SessionConfig { max_history: 2 }).unwrap();
    for line in ["one", "two", "three"] {
        accept_line(&mut session, line);
    }
    assert_eq!(session.history().entries(), ["two", "three", ""]);
}

#[test]
fn empty_lines_commit_like_any_other() {
    let (mut session, recorder) = recorded_session();
    run(&mut session, "accept-line");
    assert_eq!(
        recorder.payloads(ACCEPT_LINE),
        [Event::Text(String::new())]
    );
    assert_eq!(session.history().entries(), ["", ""]);
}
