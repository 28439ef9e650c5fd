//! Incremental line splitting for streaming byte sources.
//!
//! Lines end at `\n`, `\r`, or `\r\n`. A `\r\n` pair split across two chunks
//! still terminates a single line. Line bytes are decoded as UTF-8; invalid
//! sequences become U+FFFD so decoding always makes forward progress.
//!
//! Terminators are ASCII and never occur inside a multi-byte UTF-8 sequence,
//! so splitting on raw bytes before decoding keeps characters intact.
use std::collections::VecDeque;

use memchr::memchr2;

#[derive(Debug, Default)]
pub struct LineSplitter {
    /// Bytes of the line currently being assembled.
    pending: Vec<u8>,
    /// The previous chunk ended with `\r`; a leading `\n` belongs to it.
    skip_lf: bool,
}

impl LineSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a byte chunk, pushing every line it completes onto `lines`.
    pub fn push(&mut self, mut bytes: &[u8], lines: &mut VecDeque<String>) {
        if bytes.is_empty() {
            return;
        }

        if self.skip_lf {
            self.skip_lf = false;
            if bytes[0] == b'\n' {
                bytes = &bytes[1..];
            }
        }

        while let Some(pos) = memchr2(b'\n', b'\r', bytes) {
            self.pending.extend_from_slice(&bytes[..pos]);
            lines.push_back(self.take_line());

            let terminator = bytes[pos];
            bytes = &bytes[pos + 1..];
            if terminator == b'\r' {
                match bytes.first() {
                    Some(b'\n') => bytes = &bytes[1..],
                    Some(_) => {}
                    None => self.skip_lf = true,
                }
            }
        }

        self.pending.extend_from_slice(bytes);
    }

    /// Flush the trailing unterminated line, if any. An empty tail is not a line.
    pub fn finish(&mut self, lines: &mut VecDeque<String>) {
        self.skip_lf = false;
        if !self.pending.is_empty() {
            lines.push_back(self.take_line());
        }
    }

    /// Number of buffered bytes not yet terminated.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    fn take_line(&mut self) -> String {
        let bytes = std::mem::take(&mut self.pending);
        match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }
}
