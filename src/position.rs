use std::num::NonZeroUsize;

use serde::Serialize;

/// Position in a text file (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, in bytes)
    pub column: usize,
}

/// Byte span in a text file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Starting byte offset
    pub byte_start: usize,
    /// Ending byte offset (exclusive)
    pub byte_end: usize,
}

/// Split `content` into lines, each keeping its `\n` terminator
///
/// A trailing remainder without a terminator is the last line. Empty content
/// has no lines.
pub fn lines(content: &str) -> impl Iterator<Item = &str> {
    content.split_inclusive('\n')
}

/// Number of lines in `content`, counted the way [`lines`] splits them
pub fn line_count(content: &str) -> usize {
    lines(content).count()
}

/// Byte span of a 1-based line, terminator included
///
/// Returns `None` when the document has fewer lines than `line`.
pub fn line_span(content: &str, line: NonZeroUsize) -> Option<Span> {
    let mut byte_start = 0;
    for (index, segment) in lines(content).enumerate() {
        if index + 1 == line.get() {
            return Some(Span {
                byte_start,
                byte_end: byte_start + segment.len(),
            });
        }
        byte_start += segment.len();
    }
    None
}

/// Convert a byte offset to line and column position
///
/// # Arguments
/// * `content` - The file content as a string
/// * `byte_offset` - The byte offset to convert
///
/// # Returns
/// * `Position` with line and column (both 1-indexed)
/// * Offsets at or past the end land after the last character
pub fn byte_to_position(content: &str, byte_offset: usize) -> Position {
    let mut line = 1;
    let mut line_start = 0;

    for segment in lines(content) {
        let line_end = line_start + segment.len();
        if byte_offset < line_end {
            return Position {
                line,
                column: byte_offset - line_start + 1,
            };
        }
        if !segment.ends_with('\n') {
            break;
        }
        line_start = line_end;
        line += 1;
    }

    Position {
        line,
        column: byte_offset.saturating_sub(line_start) + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_byte_to_position_start() {
        let pos = byte_to_position("Hello\nWorld", 0);
        assert_eq!(pos, Position { line: 1, column: 1 });
    }

    #[test]
    fn test_byte_to_position_after_newline() {
        // H=0, e=1, l=2, l=3, o=4, \n=5, W=6
        let pos = byte_to_position("Hello\nWorld", 6);
        assert_eq!(pos, Position { line: 2, column: 1 });
    }

    #[test]
    fn test_byte_to_position_middle() {
        let pos = byte_to_position("Hello\nWorld", 3);
        assert_eq!(pos, Position { line: 1, column: 4 });
    }

    #[test]
    fn test_byte_to_position_end_of_unterminated_line() {
        let pos = byte_to_position("a\nb", 3);
        assert_eq!(pos, Position { line: 2, column: 2 });
    }

    #[test]
    fn test_byte_to_position_crlf() {
        // \r belongs to line 1, so offset 3 is the first byte of line 2
        let pos = byte_to_position("a\r\nb", 3);
        assert_eq!(pos, Position { line: 2, column: 1 });
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(""), 0);
        assert_eq!(line_count("one"), 1);
        assert_eq!(line_count("one\n"), 1);
        assert_eq!(line_count("one\ntwo"), 2);
        assert_eq!(line_count("\n\n\n"), 3);
    }

    #[test]
    fn test_line_span_middle_line() {
        let span = line_span("a\nbb\nc\n", nz(2)).unwrap();
        assert_eq!(span, Span { byte_start: 2, byte_end: 5 });
    }

    #[test]
    fn test_line_span_unterminated_last_line() {
        let span = line_span("a\nbb", nz(2)).unwrap();
        assert_eq!(span, Span { byte_start: 2, byte_end: 4 });
    }

    #[test]
    fn test_line_span_out_of_range() {
        assert_eq!(line_span("a\nb\n", nz(3)), None);
        assert_eq!(line_span("", nz(1)), None);
    }
}
