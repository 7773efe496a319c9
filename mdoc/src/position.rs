use std::fmt;
use std::ops::Range;

/// A 1-based, inclusive range of source lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub start_line: usize,
    pub end_line: usize,
}

impl Position {
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Position {
            start_line,
            end_line,
        }
    }

    /// A position covering exactly one line.
    pub fn line(line: usize) -> Self {
        Position::new(line, line)
    }

    /// Move both ends by `delta` lines. Saturates at zero.
    pub fn shift(&mut self, delta: isize) {
        self.start_line = self.start_line.saturating_add_signed(delta);
        self.end_line = self.end_line.saturating_add_signed(delta);
    }

    /// Number of lines covered, minus one.
    pub fn span(&self) -> usize {
        self.end_line.saturating_sub(self.start_line)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start_line == self.end_line {
            write!(f, "{}", self.start_line)
        } else {
            write!(f, "{}-{}", self.start_line, self.end_line)
        }
    }
}

/// Byte offset to line number lookup for one source text.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    /// Byte offset at which each line starts. Always begins with 0.
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        LineIndex {
            source,
            line_starts,
        }
    }

    /// The 1-based line containing `offset`.
    pub fn line_of(&self, offset: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= offset)
    }

    /// The lines covered by a byte range, ignoring trailing whitespace
    /// (pulldown-cmark block ranges usually include the final newline).
    pub fn position(&self, range: &Range<usize>) -> Position {
        let start = range.start.min(self.source.len());
        let bytes = self.source.as_bytes();
        let mut end = range.end.min(bytes.len());
        while end > start + 1 && bytes[end - 1].is_ascii_whitespace() {
            end -= 1;
        }
        let last = end.saturating_sub(1).max(start);
        Position::new(self.line_of(start), self.line_of(last))
    }
}
