//! Outcome of an analysis run and its user-facing rendering.

use crate::error::Malformation;

pub const MALFORMED_HTML: &str = "malformed HTML";
pub const URL_CONNECTION_ERROR: &str = "URL connection error";

/// Final state of a completed tracker run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Analysis {
    /// First text line seen at the greatest depth. `line` is 1-based.
    Deepest {
        text: String,
        depth: usize,
        line: usize,
    },
    /// Well-formed, but no text line was ever inside a tag.
    NoText,
    Malformed(Malformation),
}

impl Analysis {
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }

    pub fn render(&self) -> Option<&str> {
        match self {
            Self::Deepest { text, .. } => Some(text.as_str()),
            Self::NoText => None,
            Self::Malformed(_) => Some(MALFORMED_HTML),
        }
    }
}

/// Everything a run can end in, including failure to read the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    Analysis(Analysis),
    ConnectionError,
}

impl Report {
    /// The single output line, or `None` when nothing should be printed.
    pub fn render(&self) -> Option<&str> {
        match self {
            Self::Analysis(analysis) => analysis.render(),
            Self::ConnectionError => Some(URL_CONNECTION_ERROR),
        }
    }
}

impl From<Analysis> for Report {
    fn from(analysis: Analysis) -> Self {
        Self::Analysis(analysis)
    }
}
