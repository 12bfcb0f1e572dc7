// ── Command keywords ────────────────────────────────────────────────

/// A control keyword recognized in the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a new "code" operation.
    Code,
    /// Start a new "count" operation.
    Count,
    /// Discard the in-progress operation without saving it.
    Reset,
    /// Discard the in-progress operation and pop the last completed one.
    Back,
    /// Connector; re-arms the digit-accepting window.
    And,
}

impl Command {
    /// All commands in scan order. When a token contains more than one
    /// keyword, the earlier entry here is applied first within a pass.
    pub const ALL: [Command; 5] = [
        Command::Code,
        Command::Count,
        Command::Reset,
        Command::Back,
        Command::And,
    ];

    /// The spoken keyword, lowercase.
    pub fn keyword(self) -> &'static str {
        match self {
            Command::Code => "code",
            Command::Count => "count",
            Command::Reset => "reset",
            Command::Back => "back",
            Command::And => "and",
        }
    }

    /// Capitalized form, for display and recognizer hint lists.
    pub fn display(self) -> &'static str {
        match self {
            Command::Code => "Code",
            Command::Count => "Count",
            Command::Reset => "Reset",
            Command::Back => "Back",
            Command::And => "And",
        }
    }

    /// Resolve a keyword to its command, case-insensitively.
    /// Whole-string match only; substring scanning lives in the interpreter.
    pub fn from_keyword(s: &str) -> Option<Command> {
        Command::ALL
            .into_iter()
            .find(|c| c.keyword().eq_ignore_ascii_case(s))
    }
}

// ── Digit keywords ──────────────────────────────────────────────────

/// A single digit 0–9, matchable by numeral ("2") or word ("two").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Digit {
    Zero = 0,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl Digit {
    /// All digits in scan order (zero through nine). Index equals value.
    pub const ALL: [Digit; 10] = [
        Digit::Zero,
        Digit::One,
        Digit::Two,
        Digit::Three,
        Digit::Four,
        Digit::Five,
        Digit::Six,
        Digit::Seven,
        Digit::Eight,
        Digit::Nine,
    ];

    /// The spelled-out word form, lowercase.
    pub fn word(self) -> &'static str {
        match self {
            Digit::Zero => "zero",
            Digit::One => "one",
            Digit::Two => "two",
            Digit::Three => "three",
            Digit::Four => "four",
            Digit::Five => "five",
            Digit::Six => "six",
            Digit::Seven => "seven",
            Digit::Eight => "eight",
            Digit::Nine => "nine",
        }
    }

    /// The numeral form, e.g. "2".
    pub fn numeral(self) -> &'static str {
        match self {
            Digit::Zero => "0",
            Digit::One => "1",
            Digit::Two => "2",
            Digit::Three => "3",
            Digit::Four => "4",
            Digit::Five => "5",
            Digit::Six => "6",
            Digit::Seven => "7",
            Digit::Eight => "8",
            Digit::Nine => "9",
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Resolve a numeral or word form to its digit, case-insensitively.
    pub fn from_keyword(s: &str) -> Option<Digit> {
        Digit::ALL
            .into_iter()
            .find(|d| d.word().eq_ignore_ascii_case(s) || d.numeral() == s)
    }
}

// ── Recognizer hints ────────────────────────────────────────────────

/// The full keyword list for seeding an external speech recognizer's
/// contextual-hint strings: commands in raw and capitalized form, digits
/// in numeral, word, and capitalized-word form.
pub fn recognizer_hints() -> Vec<String> {
    let mut hints = Vec::new();
    for command in Command::ALL {
        hints.push(command.keyword().to_string());
        hints.push(command.display().to_string());
    }
    for digit in Digit::ALL {
        hints.push(digit.numeral().to_string());
        hints.push(digit.word().to_string());
        let mut capitalized = digit.word().to_string();
        capitalized[..1].make_ascii_uppercase();
        hints.push(capitalized);
    }
    hints
}
