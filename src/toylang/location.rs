//! Source location utilities
//!
//! Tokens carry byte ranges into the program text. Errors report line/column
//! positions, which are computed here on demand from a table of line starts.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// A position in source code. Both fields are 0-based; `column` counts
/// characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    // Rendered 1-based, the way editors count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Fast conversion from byte offsets to line/column positions
#[derive(Debug, Clone)]
pub struct SourceLocation {
    source: String,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source: source.to_string(),
            line_starts,
        }
    }

    /// Convert a byte offset to a line/column position
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let line_start = self.line_starts[line];
        let column = self
            .source
            .get(line_start..byte_offset)
            .map_or(byte_offset - line_start, |prefix| prefix.chars().count());

        Position::new(line, column)
    }

    /// Position of the first byte of a range
    pub fn range_start(&self, range: &Range<usize>) -> Position {
        self.byte_to_position(range.start)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_position_single_line() {
        let loc = SourceLocation::new("return 2");
        assert_eq!(loc.byte_to_position(0), Position::new(0, 0));
        assert_eq!(loc.byte_to_position(7), Position::new(0, 7));
    }

    #[test]
    fn test_byte_to_position_multiline() {
        let loc = SourceLocation::new("def f()\n  1\nf()");

        assert_eq!(loc.byte_to_position(0), Position::new(0, 0));
        assert_eq!(loc.byte_to_position(8), Position::new(1, 0));
        assert_eq!(loc.byte_to_position(10), Position::new(1, 2));
        assert_eq!(loc.byte_to_position(12), Position::new(2, 0));
    }

    #[test]
    fn test_columns_count_characters() {
        let loc = SourceLocation::new("é = 1\nñañ(2)");
        // 'é' is two bytes
        assert_eq!(loc.byte_to_position(3), Position::new(0, 2));
        // "ñañ" is five bytes
        assert_eq!(loc.byte_to_position(7 + 5), Position::new(1, 3));
    }

    #[test]
    fn test_line_count() {
        assert_eq!(SourceLocation::new("single").line_count(), 1);
        assert_eq!(SourceLocation::new("a\nb\n").line_count(), 3);
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Position::new(0, 0).to_string(), "1:1");
        assert_eq!(Position::new(2, 4).to_string(), "3:5");
    }
}
