// Cursor movement, text mutation, and kill/yank behavior as an embedding
// application sees it: commands in, events out.

mod common;

use common::*;
use linekit::prelude::*;

#[test]
fn typing_and_word_motion() {
    let (mut session, _) = recorded_session();
    type_text(&mut session, "choice --halp");
    assert_eq!(session.buffer().text(), "choice --halp");
    assert_eq!(session.buffer().cursor(), 13);

    run(&mut session, "beginning-of-line");
    run(&mut session, "forward-word");
    assert_eq!(session.buffer().cursor(), 6);

    run(&mut session, "end-of-line");
    session
        .dispatch("backward-delete-char", &Event::Count(1))
        .unwrap();
    assert_eq!(session.buffer().text(), "choice --hal");
    assert_eq!(session.buffer().cursor(), 12);
}

#[test]
fn insert_then_delete_restores_buffer_and_cursor() {
    let (mut session, _) = recorded_session();
    type_text(&mut session, "choice ");
    let text_before = session.buffer().text().to_string();
    let cursor_before = session.buffer().cursor();

    let typed = "--halp";
    type_text(&mut session, typed);
    session
        .dispatch("backward-delete-char", &Event::Count(rune_count(typed)))
        .unwrap();

    assert_eq!(session.buffer().text(), text_before);
    assert_eq!(session.buffer().cursor(), cursor_before);
}

#[test]
fn forward_word_is_monotone_and_stops_at_end_of_line() {
    let (mut session, _) = recorded_session();
    type_text(&mut session, "one two three");
    run(&mut session, "beginning-of-line");

    let mut previous = session.buffer().cursor();
    for _ in 0..10 {
        run(&mut session, "forward-word");
        let cursor = session.buffer().cursor();
        assert!(cursor >= previous);
        previous = cursor;
    }
    assert_eq!(previous, session.buffer().len());
}

#[test]
fn backward_word_lands_on_spaces_then_line_start() {
    let (mut session, _) = recorded_session();
    type_text(&mut session, "one two three");
    run(&mut session, "backward-word");
    assert_eq!(session.buffer().cursor(), 7);
    run(&mut session, "backward-word");
    assert_eq!(session.buffer().cursor(), 3);
    run(&mut session, "backward-word");
    assert_eq!(session.buffer().cursor(), 0);
    run(&mut session, "backward-word");
    assert_eq!(session.buffer().cursor(), 0);
}

#[test]
fn movement_at_the_boundaries_stays_silent() {
    let (mut session, recorder) = recorded_session();
    type_text(&mut session, "ab");
    recorder.clear();

    run(&mut session, "forward-char");
    run(&mut session, "end-of-line");
    assert!(recorder.events().is_empty());

    run(&mut session, "beginning-of-line");
    recorder.clear();
    run(&mut session, "backward-char");
    assert!(recorder.events().is_empty());
}

#[test]
fn overwrite_mode_replaces_and_grows() {
    let (mut session, _) = recorded_session();
    type_text(&mut session, "abcdef");
    run(&mut session, "beginning-of-line");
    run(&mut session, "forward-char");
    run(&mut session, "forward-char");

    run(&mut session, "overwrite-mode");
    type_text(&mut session, "XY");
    assert_eq!(session.buffer().text(), "abXYef");
    assert_eq!(session.buffer().cursor(), 4);

    run(&mut session, "end-of-line");
    type_text(&mut session, "++");
    assert_eq!(session.buffer().text(), "abXYef++");

    // Explicit argument turns it back off.
    session
        .dispatch("overwrite-mode", &Event::Mode(Some(false)))
        .unwrap();
    assert!(!session.buffer().overwrite());
}

#[test]
fn kill_line_then_yank_round_trips() {
    let (mut session, _) = recorded_session();
    type_text(&mut session, "abcdef");
    run(&mut session, "beginning-of-line");
    run(&mut session, "forward-char");
    run(&mut session, "forward-char");
    run(&mut session, "forward-char");
    run(&mut session, "kill-line");
    assert_eq!(session.buffer().text(), "abc");
    assert_eq!(session.kill_ring().text(), Some("def"));

    run(&mut session, "yank");
    assert_eq!(session.buffer().text(), "abcdef");
    assert_eq!(session.buffer().cursor(), 6);
}

#[test]
fn kill_persists_across_accepts() {
    let (mut session, _) = recorded_session();
    type_text(&mut session, "keep this");
    run(&mut session, "beginning-of-line");
    run(&mut session, "kill-line");
    run(&mut session, "accept-line");

    run(&mut session, "yank");
    assert_eq!(session.buffer().text(), "keep this");
}

#[test]
fn change_and_move_carry_the_new_state() {
    let (mut session, recorder) = recorded_session();
    type_text(&mut session, "ab");
    assert_eq!(
        recorder.events(),
        [
            (CHANGE.to_string(), Event::Text("ab".to_string())),
            (MOVE.to_string(), Event::Cursor(2)),
        ]
    );

    recorder.clear();
    run(&mut session, "beginning-of-line");
    assert_eq!(
        recorder.events(),
        [(MOVE.to_string(), Event::Cursor(0))]
    );
}

#[test]
fn prelude_result_alias_works_as_a_return_type() {
    fn drive(session: &mut Session) -> Result<()> {
        session.dispatch("self-insert", &Event::Text("ok".to_string()))?;
        session.dispatch("accept-line", &Event::None)
    }

    let (mut session, _) = recorded_session();
    drive(&mut session).unwrap();
    assert_eq!(session.history().entries(), ["ok", ""]);
}

#[test]
fn multibyte_text_moves_by_runes() {
    let (mut session, recorder) = recorded_session();
    type_text(&mut session, "日本語 input");
    assert_eq!(session.buffer().cursor(), 9);

    run(&mut session, "backward-word");
    assert_eq!(session.buffer().cursor(), 3);
    run(&mut session, "backward-char");
    assert_eq!(session.buffer().cursor(), 2);

    recorder.clear();
    session.dispatch("backward-delete-char", &Event::Count(1)).unwrap();
    assert_eq!(session.buffer().text(), "日語 input");
    assert_eq!(recorder.payloads(MOVE), [Event::Cursor(1)]);
}
