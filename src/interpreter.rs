use crate::operation::Operation;
use crate::vocab::{Command, Digit};

/// State after processing one token: the operation under construction (if
/// any) and the full completed history as of that point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub current: Option<Operation>,
    pub completed: Vec<Operation>,
}

/// The token state machine.
///
/// `process` fully resets the state at entry, so each call interprets its
/// token sequence in isolation. Calls against the same instance must not
/// overlap; there is no interior locking.
pub struct Interpreter {
    current: Option<Operation>,
    completed: Vec<Operation>,
    accept_next_digit: bool,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            current: None,
            completed: Vec::new(),
            accept_next_digit: true,
        }
    }

    /// Interpret a token sequence, invoking `emit` after each token with
    /// the current operation and the completed history so far.
    ///
    /// Unrecognized text is dropped silently; there are no error states.
    pub fn process<'a, I, F>(&mut self, tokens: I, mut emit: F)
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut(Option<&Operation>, &[Operation]),
    {
        self.current = None;
        self.completed.clear();
        self.accept_next_digit = true;

        for token in tokens {
            self.consume(&token.to_lowercase());
            emit(self.current.as_ref(), &self.completed);
        }
    }

    /// Strip every recognizable keyword out of one lowercased token,
    /// applying each as it is removed.
    ///
    /// Each pass checks every command and then every digit, in vocabulary
    /// order, against the shrinking text; the loop repeats as long as any
    /// pass removed something, so glued matches ("code2") all surface.
    /// Matches are substrings, not whole tokens: "barcode" triggers `code`.
    fn consume(&mut self, token: &str) {
        let mut text = token.to_string();
        let mut changed = true;

        while changed {
            changed = false;
            for command in Command::ALL {
                let keyword = command.keyword();
                if let Some(pos) = text.find(keyword) {
                    text.replace_range(pos..pos + keyword.len(), "");
                    changed = true;
                    self.execute(command);
                }
            }
            for digit in Digit::ALL {
                // Word form takes precedence over the numeral form.
                let found = text
                    .find(digit.word())
                    .map(|pos| (pos, digit.word().len()))
                    .or_else(|| text.find(digit.numeral()).map(|pos| (pos, digit.numeral().len())));
                if let Some((pos, len)) = found {
                    text.replace_range(pos..pos + len, "");
                    changed = true;
                    self.push_digit(digit);
                }
            }
        }
    }

    /// Every command re-arms the digit window before its own effect runs.
    fn execute(&mut self, command: Command) {
        self.accept_next_digit = true;
        match command {
            Command::Code | Command::Count => {
                self.complete_current();
                self.current = Some(Operation::new(command));
            }
            Command::Reset => self.current = None,
            Command::Back => {
                self.current = None;
                self.completed.pop();
            }
            Command::And => {}
        }
    }

    /// Append a digit to the current operation, if one exists and the
    /// window is open. One digit per window; connectors re-open it.
    fn push_digit(&mut self, digit: Digit) {
        if let Some(op) = &mut self.current {
            if self.accept_next_digit {
                op.operands.push(digit);
                self.accept_next_digit = false;
            }
        }
    }

    /// Finalize the current operation into history. Operations with no
    /// operands are dropped, as is a candidate structurally equal to the
    /// last history entry (no adjacent duplicates).
    fn complete_current(&mut self) {
        if let Some(op) = self.current.take() {
            if !op.operands.is_empty() && self.completed.last() != Some(&op) {
                self.completed.push(op);
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}
