use std::collections::VecDeque;
use std::fmt;
use std::io::{self, Read};

use tools::LineSplitter;

use crate::error::FetchError;

/// Pull-based line iterator over a byte stream.
///
/// Reads one chunk at a time and only when no complete line is buffered, so a
/// consumer that stops iterating stops reading the source.
pub struct LineReader {
    source: Box<dyn Read + Send>,
    splitter: LineSplitter,
    lines: VecDeque<String>,
    buf: Vec<u8>,
    done: bool,
}

impl LineReader {
    pub fn new<R>(source: R, chunk_size: usize) -> Self
    where
        R: Read + Send + 'static,
    {
        Self {
            source: Box::new(source),
            splitter: LineSplitter::new(),
            lines: VecDeque::new(),
            buf: vec![0; chunk_size.max(1)],
            done: false,
        }
    }
}

impl fmt::Debug for LineReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineReader")
            .field("buffered_lines", &self.lines.len())
            .field("pending_bytes", &self.splitter.pending_len())
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl Iterator for LineReader {
    type Item = Result<String, FetchError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.lines.pop_front() {
                return Some(Ok(line));
            }
            if self.done {
                return None;
            }

            match self.source.read(&mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    self.splitter.finish(&mut self.lines);
                }
                Ok(n) => self.splitter.push(&self.buf[..n], &mut self.lines),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    log::debug!(target: "net.fetch", "read failed: {err}");
                    self.done = true;
                    self.lines.clear();
                    return Some(Err(err.into()));
                }
            }
        }
    }
}
