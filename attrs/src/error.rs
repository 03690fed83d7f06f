//! Error types for attribute parsing and checking.

use std::path::PathBuf;

use crate::position::Position;

/// A parse failure with the position where it was detected.
///
/// Parsing stops at the first error; there is no recovery or accumulation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("{pos}: expected {expected}, found '{found}'")]
    UnexpectedChar {
        pos: Position,
        expected: String,
        found: char,
    },

    #[error("{pos}: unexpected end of input, expected {expected}")]
    UnexpectedEnd { pos: Position, expected: String },

    #[error("{pos}: invalid number '{value}'")]
    InvalidNumber { pos: Position, value: String },

    #[error("{pos}: invalid modifier '{name}'")]
    InvalidModifier { pos: Position, name: String },

    #[error("{pos}: invalid selector '{value}'")]
    InvalidSelector { pos: Position, value: String },

    #[error("{pos}: invalid value '{value}' for '{key}'")]
    InvalidValue {
        pos: Position,
        key: String,
        value: String,
    },
}

impl ParseError {
    /// Position at which the error was detected.
    pub fn position(&self) -> Position {
        match self {
            ParseError::UnexpectedChar { pos, .. }
            | ParseError::UnexpectedEnd { pos, .. }
            | ParseError::InvalidNumber { pos, .. }
            | ParseError::InvalidModifier { pos, .. }
            | ParseError::InvalidSelector { pos, .. }
            | ParseError::InvalidValue { pos, .. } => *pos,
        }
    }

    /// Render the error against its source as a message, the offending line,
    /// and a caret under the error column.
    pub fn render(&self, input: &str) -> String {
        let pos = self.position();
        let line = input.lines().nth(pos.line - 1).unwrap_or("");
        let indent: String = line
            .chars()
            .take(pos.column - 1)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        format!("{}\n  {}\n  {}^", self, line, indent)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Not found: {0}")]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
