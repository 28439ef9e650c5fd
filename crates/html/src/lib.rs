//! Line-based tag depth analysis.
//!
//! Input is a sequence of raw text lines. Each line is either an opening tag,
//! a closing tag, free text, or ignorable. The tracker keeps a stack of open
//! tag names and records the first text line seen at the greatest depth.
//!
//! Known limitations (intentional):
//! - One construct per line; tags spanning lines or mixed with text are not
//!   recognized as tags.
//! - Tag names are taken verbatim between the delimiters, attributes included.
//! - Lines starting with `<!` are skipped, but multi-line comment bodies are not.

pub mod classify;
pub mod error;
pub mod report;
pub mod stack;
pub mod tracker;

pub use crate::classify::{LineKind, classify_line, trim_line};
pub use crate::error::{Malformation, MalformationCode};
pub use crate::report::{Analysis, MALFORMED_HTML, Report, URL_CONNECTION_ERROR};
pub use crate::stack::TagStack;
pub use crate::tracker::{DepthTracker, TrackerStatus, analyze_lines};
