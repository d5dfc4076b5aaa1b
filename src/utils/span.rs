//! Source location tracking
//!
//! Positions are tracked per line during validation: `line` is the 1-based
//! line number within the source unit and `column` the 1-based column within
//! that line, with `offset` the byte offset of the column inside the line.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source text with line, column, and byte offset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Byte offset within the current line (0-based)
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Position {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Starting position of a line (offset 0, column 1)
    pub fn line_start(line: u32) -> Self {
        Self {
            offset: 0,
            line,
            column: 1,
        }
    }

    /// Position at a byte offset inside a line of ASCII-compatible text
    pub fn at_offset(line: u32, offset: usize) -> Self {
        Self {
            offset,
            line,
            column: offset as u32 + 1,
        }
    }

    /// Advance position by n bytes within the same line
    pub fn advance_bytes(self, n: usize) -> Self {
        Self {
            offset: self.offset + n,
            line: self.line,
            column: self.column + n as u32,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span of source text from start to end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(
            start.offset <= end.offset || start.line < end.line,
            "Span start must not be after end"
        );
        Self { start, end }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// Create a single-character span
    pub fn single(pos: Position) -> Self {
        let end = Position {
            offset: pos.offset + 1,
            line: pos.line,
            column: pos.column + 1,
        };
        Self { start: pos, end }
    }

    /// Span covering a token's lexeme within a line
    pub fn of_lexeme(line: u32, offset: usize, len: usize) -> Self {
        let start = Position::at_offset(line, offset);
        Self {
            start,
            end: start.advance_bytes(len),
        }
    }

    /// Byte length of this span
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Slice the covered text out of the owning line
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start.offset..self.end.offset]
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(
                f,
                "{}:{}-{}",
                self.start.line, self.start.column, self.end.column
            )
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_at_offset() {
        let pos = Position::at_offset(3, 4);
        assert_eq!(pos.line, 3);
        assert_eq!(pos.offset, 4);
        assert_eq!(pos.column, 5);
    }

    #[test]
    fn test_span_of_lexeme() {
        let span = Span::of_lexeme(1, 2, 3);
        assert_eq!(span.len(), 3);
        assert_eq!(span.slice("x = 55"), "= 5");
        assert_eq!(span.to_string(), "1:3-6");
    }

    #[test]
    fn test_single_span() {
        let span = Span::single(Position::at_offset(2, 0));
        assert_eq!(span.len(), 1);
        assert!(!span.is_empty());
    }
}
