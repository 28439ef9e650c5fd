//! Structural malformation detected by the depth tracker.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformationCode {
    /// A closing tag arrived with no open tag.
    UnexpectedClose { name: String },
    /// A closing tag did not match the innermost open tag.
    MismatchedClose { expected: String, found: String },
    /// Input ended with tags still open, outermost first.
    Unclosed { open: Vec<String> },
}

/// Why a run is malformed. `line` is 1-based; for [`MalformationCode::Unclosed`]
/// it is the number of lines consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Malformation {
    pub code: MalformationCode,
    pub line: usize,
}

impl fmt::Display for Malformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            MalformationCode::UnexpectedClose { name } => {
                write!(f, "line {}: closing </{name}> with no open tag", self.line)
            }
            MalformationCode::MismatchedClose { expected, found } => write!(
                f,
                "line {}: closing </{found}> while <{expected}> is open",
                self.line
            ),
            MalformationCode::Unclosed { open } => write!(
                f,
                "end of input after line {}: {} unclosed tag(s): {}",
                self.line,
                open.len(),
                open.join(" > ")
            ),
        }
    }
}
