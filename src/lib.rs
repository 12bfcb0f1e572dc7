pub mod interpreter;
pub mod operation;
pub mod vocab;

use regex::Regex;

pub use interpreter::{Interpreter, Snapshot};
pub use operation::Operation;
pub use vocab::{recognizer_hints, Command, Digit};

// ── Core API ───────────────────────────────────────────────────────

/// Interpret a sequence of transcript tokens, returning one snapshot per
/// input token: the operation under construction (if any) and the completed
/// history as of that token.
///
/// Consumers are expected to re-render fully from each snapshot; no diffing
/// contract is offered.
pub fn process_speech<'a, I>(tokens: I) -> Vec<Snapshot>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut interpreter = Interpreter::new();
    let mut snapshots = Vec::new();
    interpreter.process(tokens, |current, completed| {
        snapshots.push(Snapshot {
            current: current.cloned(),
            completed: completed.to_vec(),
        });
    });
    snapshots
}

/// Split a free-text transcript into word tokens.
///
/// Speech engines sometimes punctuate their transcriptions, so this takes
/// alphanumeric runs rather than splitting on whitespace.
pub fn tokenize(transcript: &str) -> Vec<&str> {
    // The pattern is fixed, so compilation cannot fail.
    let word = Regex::new(r"[A-Za-z0-9]+").unwrap();
    word.find_iter(transcript).map(|m| m.as_str()).collect()
}
