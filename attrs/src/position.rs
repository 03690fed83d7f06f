//! Source positions for error reporting.

use serde::Serialize;

/// A location in the input: byte offset plus 1-based line and column.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Default for Position {
    #[inline]
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Position {
    /// Step past `ch`.
    pub fn advance(&mut self, ch: char) {
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Compute the position of byte `offset` in `input` by scanning from the start.
    ///
    /// Offsets past the end clamp to the end of input.
    pub fn at(input: &str, offset: usize) -> Self {
        Self::default().advanced_to(input, offset)
    }

    /// Continue scanning from this checkpoint up to byte `offset`.
    pub fn advanced_to(mut self, input: &str, offset: usize) -> Self {
        let end = offset.min(input.len());
        if self.offset >= end {
            return self;
        }
        for ch in input[self.offset..].chars() {
            if self.offset >= end {
                break;
            }
            self.advance(ch);
        }
        self
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
