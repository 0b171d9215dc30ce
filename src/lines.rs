//! Lexicon line reader (C9).
//!
//! Grounded on `read_string` in `original_source/Automaton/Automaton.h`,
//! re-expressed over `std::io::BufRead::read_until` rather than a
//! fixed-size C string buffer, matching the spec's "buffered byte-reader
//! wrapper" note (§1) and the teacher's general reliance on `std::io`
//! idioms rather than hand-rolled buffering.

use std::io::BufRead;

/// Iterator over the `\n`-terminated lines of a byte lexicon.
///
/// Each item is one line with its trailing `\n` (and, if present, `\r`)
/// stripped. A final line with no trailing newline is still yielded.
pub struct Lines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Lines { reader, buf: Vec::new() }
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = std::io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(std::mem::take(&mut self.buf)))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn splits_on_newlines() {
        let data = b"cat\ndog\nemu\n".to_vec();
        let lines: Vec<Vec<u8>> =
            Lines::new(Cursor::new(data)).map(|r| r.unwrap()).collect();
        assert_eq!(lines, vec![b"cat".to_vec(), b"dog".to_vec(), b"emu".to_vec()]);
    }

    #[test]
    fn handles_missing_trailing_newline() {
        let data = b"alpha\nbeta".to_vec();
        let lines: Vec<Vec<u8>> =
            Lines::new(Cursor::new(data)).map(|r| r.unwrap()).collect();
        assert_eq!(lines, vec![b"alpha".to_vec(), b"beta".to_vec()]);
    }

    #[test]
    fn strips_carriage_returns() {
        let data = b"one\r\ntwo\r\n".to_vec();
        let lines: Vec<Vec<u8>> =
            Lines::new(Cursor::new(data)).map(|r| r.unwrap()).collect();
        assert_eq!(lines, vec![b"one".to_vec(), b"two".to_vec()]);
    }

    #[test]
    fn empty_input_yields_no_lines() {
        let lines: Vec<_> = Lines::new(Cursor::new(Vec::new())).collect();
        assert!(lines.is_empty());
    }

    #[test]
    fn blank_line_round_trips_as_the_empty_string() {
        let data = b"\nfoo\n".to_vec();
        let lines: Vec<Vec<u8>> =
            Lines::new(Cursor::new(data)).map(|r| r.unwrap()).collect();
        assert_eq!(lines, vec![Vec::new(), b"foo".to_vec()]);
    }
}
