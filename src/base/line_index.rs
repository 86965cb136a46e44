//! Byte offset to line/column conversion.
//!
//! Columns count UTF-8 bytes from the line start, the same unit the lexer
//! reports in `Token::column`.

use super::position::{Position, Span};
use text_size::{TextRange, TextSize};

/// A 1-based line/column pair
pub type LineCol = Position;

/// Precomputed line starts for one document.
///
/// `\n`, `\r\n` and a lone `\r` all end a line, the same set of terminators
/// the lexer folds into `NEWLINE` tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut line_starts = vec![TextSize::new(0)];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    i += 2;
                    line_starts.push(TextSize::new(i as u32));
                }
                b'\n' | b'\r' => {
                    i += 1;
                    line_starts.push(TextSize::new(i as u32));
                }
                _ => i += 1,
            }
        }
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Number of lines (a trailing terminator opens an empty last line)
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset into a 1-based line/column.
    ///
    /// Offsets past the end clamp to the end of the document.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let column = u32::from(offset - self.line_starts[line]) as usize;
        Position::new(line + 1, column + 1)
    }

    /// 1-based line of an offset
    pub fn line(&self, offset: TextSize) -> usize {
        self.line_col(offset).line
    }

    pub fn span(&self, range: TextRange) -> Span {
        Span::new(self.line_col(range.start()), self.line_col(range.end()))
    }

    /// Byte offset of the first character of a 1-based line
    pub fn line_start(&self, line: usize) -> Option<TextSize> {
        line.checked_sub(1)
            .and_then(|idx| self.line_starts.get(idx))
            .copied()
    }
}
