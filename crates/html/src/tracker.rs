//! Depth tracker: tag stack discipline and deepest-text selection.
//!
//! The tracker is fed one raw line at a time. Once it turns malformed it stops
//! classifying input and its state is frozen; callers may stop feeding early.

use crate::classify::{LineKind, classify_line};
use crate::error::{Malformation, MalformationCode};
use crate::report::Analysis;
use crate::stack::TagStack;

/// Whether the tracker still accepts input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackerStatus {
    Running,
    Malformed,
}

/// Per-run state. Construct a fresh tracker for every analysis.
#[derive(Debug, Default)]
pub struct DepthTracker {
    stack: TagStack,
    max_depth: usize,
    deepest_text: Option<String>,
    deepest_line: usize,
    malformation: Option<Malformation>,
    lines_seen: usize,
}

impl DepthTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one raw line. Lines fed after malformation are not looked at.
    pub fn feed(&mut self, line: &str) -> TrackerStatus {
        if self.malformation.is_some() {
            return TrackerStatus::Malformed;
        }
        self.lines_seen += 1;

        let kind = classify_line(line);
        log::trace!(
            target: "html.tracker",
            "line {} depth {}: {kind:?}",
            self.lines_seen,
            self.depth()
        );

        match kind {
            LineKind::OpenTag(name) => self.stack.push(name),
            LineKind::CloseTag(name) => self.close(name),
            LineKind::Text(text) => self.text(text),
            LineKind::Ignorable => {}
        }

        self.status()
    }

    /// End of input. Tags still open at this point make the run malformed.
    pub fn finish(mut self) -> Analysis {
        if self.malformation.is_none() && !self.stack.is_empty() {
            let open = std::mem::take(&mut self.stack).into_names();
            self.mark_malformed(MalformationCode::Unclosed { open });
        }

        if let Some(malformation) = self.malformation {
            return Analysis::Malformed(malformation);
        }

        match self.deepest_text {
            Some(text) => Analysis::Deepest {
                text,
                depth: self.max_depth,
                line: self.deepest_line,
            },
            None => Analysis::NoText,
        }
    }

    pub fn status(&self) -> TrackerStatus {
        if self.malformation.is_some() {
            TrackerStatus::Malformed
        } else {
            TrackerStatus::Running
        }
    }

    pub fn is_malformed(&self) -> bool {
        self.malformation.is_some()
    }

    pub fn malformation(&self) -> Option<&Malformation> {
        self.malformation.as_ref()
    }

    /// Current depth; always the number of open tags.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn deepest_text(&self) -> Option<&str> {
        self.deepest_text.as_deref()
    }

    pub fn stack(&self) -> &TagStack {
        &self.stack
    }

    /// Lines consumed while running.
    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    fn close(&mut self, name: &str) {
        let Some(open) = self.stack.pop() else {
            self.mark_malformed(MalformationCode::UnexpectedClose {
                name: name.to_owned(),
            });
            return;
        };
        if open != name {
            self.mark_malformed(MalformationCode::MismatchedClose {
                expected: open,
                found: name.to_owned(),
            });
        }
    }

    fn text(&mut self, text: &str) {
        // Strictly deeper only: the first text at a given maximum depth wins.
        let depth = self.depth();
        if depth > self.max_depth {
            self.max_depth = depth;
            self.deepest_text = Some(text.to_owned());
            self.deepest_line = self.lines_seen;
        }
    }

    fn mark_malformed(&mut self, code: MalformationCode) {
        let malformation = Malformation {
            code,
            line: self.lines_seen,
        };
        log::debug!(target: "html.tracker", "malformed: {malformation}");
        self.malformation = Some(malformation);
    }
}

/// Run a fresh tracker over `lines`, pulling no further lines once malformed.
pub fn analyze_lines<I>(lines: I) -> Analysis
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut tracker = DepthTracker::new();
    for line in lines {
        if tracker.feed(line.as_ref()) == TrackerStatus::Malformed {
            break;
        }
    }
    tracker.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(tracker: &mut DepthTracker, lines: &[&str]) {
        for line in lines {
            tracker.feed(line);
            assert_eq!(tracker.depth(), tracker.stack().len());
        }
    }

    #[test]
    fn depth_follows_open_and_close() {
        let mut tracker = DepthTracker::new();
        assert_eq!(tracker.feed("<a>"), TrackerStatus::Running);
        assert_eq!(tracker.depth(), 1);
        tracker.feed("<b>");
        assert_eq!(tracker.depth(), 2);
        assert_eq!(tracker.stack().len(), 2);
        tracker.feed("</b>");
        assert_eq!(tracker.depth(), 1);
        tracker.feed("</a>");
        assert_eq!(tracker.depth(), 0);
        assert_eq!(tracker.finish(), Analysis::NoText);
    }

    #[test]
    fn text_at_depth_zero_is_never_recorded() {
        let mut tracker = DepthTracker::new();
        feed_all(&mut tracker, &["loose", "<a>", "</a>", "after"]);
        assert_eq!(tracker.max_depth(), 0);
        assert_eq!(tracker.deepest_text(), None);
        assert_eq!(tracker.finish(), Analysis::NoText);
    }

    #[test]
    fn first_text_at_max_depth_wins() {
        let mut tracker = DepthTracker::new();
        feed_all(
            &mut tracker,
            &["<a>", "<b>", "first", "second", "</b>", "<c>", "third", "</c>", "</a>"],
        );
        assert_eq!(tracker.max_depth(), 2);
        assert_eq!(tracker.deepest_text(), Some("first"));
        assert_eq!(
            tracker.finish(),
            Analysis::Deepest {
                text: "first".to_string(),
                depth: 2,
                line: 3,
            }
        );
    }

    #[test]
    fn ignorable_lines_count_toward_line_numbers() {
        let mut tracker = DepthTracker::new();
        feed_all(&mut tracker, &["<!DOCTYPE html>", "", "<p>", "  deep  ", "</p>"]);
        assert_eq!(tracker.lines_seen(), 5);
        assert_eq!(
            tracker.finish(),
            Analysis::Deepest {
                text: "deep".to_string(),
                depth: 1,
                line: 4,
            }
        );
    }

    #[test]
    fn close_on_empty_stack_is_malformed() {
        let mut tracker = DepthTracker::new();
        assert_eq!(tracker.feed("</a>"), TrackerStatus::Malformed);
        assert_eq!(
            tracker.malformation(),
            Some(&Malformation {
                code: MalformationCode::UnexpectedClose {
                    name: "a".to_string()
                },
                line: 1,
            })
        );
    }

    #[test]
    fn mismatched_close_reports_both_names() {
        let mut tracker = DepthTracker::new();
        feed_all(&mut tracker, &["<a>", "<b>", "</a>"]);
        assert_eq!(
            tracker.malformation().map(|m| &m.code),
            Some(&MalformationCode::MismatchedClose {
                expected: "b".to_string(),
                found: "a".to_string(),
            })
        );
    }

    #[test]
    fn unclosed_tags_are_reported_at_finish() {
        let mut tracker = DepthTracker::new();
        feed_all(&mut tracker, &["<html>", "<body>", "text"]);
        assert_eq!(tracker.status(), TrackerStatus::Running);
        assert_eq!(
            tracker.finish(),
            Analysis::Malformed(Malformation {
                code: MalformationCode::Unclosed {
                    open: vec!["html".to_string(), "body".to_string()],
                },
                line: 3,
            })
        );
    }

    #[test]
    fn malformation_freezes_state() {
        let mut tracker = DepthTracker::new();
        feed_all(&mut tracker, &["<a>", "shallow", "</b>"]);
        assert!(tracker.is_malformed());
        let depth = tracker.depth();
        let lines = tracker.lines_seen();

        for line in ["<x>", "<y>", "deeper", "</y>", "</x>", "</a>"] {
            assert_eq!(tracker.feed(line), TrackerStatus::Malformed);
        }
        assert!(tracker.is_malformed());
        assert_eq!(tracker.depth(), depth);
        assert_eq!(tracker.lines_seen(), lines);
        assert_eq!(tracker.max_depth(), 1);
        assert_eq!(tracker.deepest_text(), Some("shallow"));
        assert!(tracker.finish().is_malformed());
    }

    #[test]
    fn analyze_lines_stops_pulling_after_malformation() {
        let mut pulled = 0;
        let lines = ["</a>", "<b>", "text", "</b>"].into_iter().inspect(|_| pulled += 1);
        let analysis = analyze_lines(lines);
        assert!(analysis.is_malformed());
        assert_eq!(pulled, 1);
    }
}
