//! Drives an editing session with a scripted key sequence and prints the
//! event stream a renderer would see. No terminal I/O involved.

use linekit::prelude::*;

fn script() -> Vec<KeyInput> {
    // An ambiguous completion, a correction, a unique completion, a submit.
    let mut inputs: Vec<KeyInput> = "choice --v".chars().map(KeyInput::char).collect();
    inputs.push(KeyInput::key(Key::Tab));
    inputs.push(KeyInput::key(Key::Backspace));
    inputs.push(KeyInput::char('h'));
    inputs.push(KeyInput::key(Key::Tab));
    inputs.push(KeyInput::key(Key::Enter));

    // Recall the submitted line and start extending it.
    inputs.push(KeyInput::key(Key::Up));
    inputs.extend(" now".chars().map(KeyInput::char));
    inputs
}

fn main() -> Result<()> {
    let mut session = Session::new();
    session.set_provider(StaticCandidates::from_strings(vec![
        "--help", "--verbose", "--version",
    ]));
    let recorder = EventRecorder::attach(&mut session);

    for input in script() {
        session.feed(&input)?;
    }

    for (name, event) in recorder.events() {
        match event {
            Event::Text(text) => println!("{name:<12} {text:?}"),
            Event::Cursor(offset) => println!("{name:<12} cursor={offset}"),
            Event::Candidates(candidates) => println!("{name:<12} {candidates:?}"),
            other => println!("{name:<12} {other:?}"),
        }
    }

    println!("---");
    println!("buffer:  {:?}", session.buffer().text());
    println!("history: {:?}", session.history().entries());
    Ok(())
}
