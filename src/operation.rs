use crate::vocab::{Command, Digit};
use std::fmt;

/// A command tag plus its accumulated digit operands.
///
/// Equality is structural: same command and the same operand sequence in
/// order. Operands are only ever appended; removal happens by discarding
/// the whole operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub command: Command,
    pub operands: Vec<Digit>,
}

impl Operation {
    pub fn new(command: Command) -> Self {
        Operation {
            command,
            operands: Vec::new(),
        }
    }

    pub fn with_operands(command: Command, operands: Vec<Digit>) -> Self {
        Operation { command, operands }
    }

    /// Operands concatenated as a digit string, e.g. `[2, 3, 4]` → "234".
    pub fn operand_string(&self) -> String {
        self.operands.iter().map(|d| d.numeral()).collect()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operands.is_empty() {
            write!(f, "{}", self.command.display())
        } else {
            write!(f, "{} {}", self.command.display(), self.operand_string())
        }
    }
}
