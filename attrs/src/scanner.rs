//! Cursor over attribute text with the tokenizing primitives shared by
//! the trigger, swap and sync parsers.

use crate::error::ParseError;
use crate::position::Position;

/// Duration units understood by [`Scanner::read_number_with_unit`], with
/// their multiplier to milliseconds.
const UNIT_FACTORS: &[(&str, u64)] = &[("ms", 1), ("s", 1_000), ("m", 60_000)];

/// Units accepted for trigger and swap durations.
pub const DURATION_UNITS: &[&str] = &["ms", "s"];

/// Characters allowed in identifiers and keywords.
pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

/// A forward-only cursor over an input string.
///
/// Failed reads leave the cursor wherever the failure was detected; callers
/// treat any error as terminal.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: Position,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: Position::default(),
        }
    }

    /// Current cursor position.
    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    /// The unconsumed input.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos.offset..]
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos.offset >= self.input.len()
    }

    #[inline]
    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn starts_with(&self, literal: &str) -> bool {
        self.rest().starts_with(literal)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos.advance(ch);
        Some(ch)
    }

    /// Consume characters while `pred` holds and return the consumed slice.
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos.offset;
        while let Some(c) = self.peek_char() {
            if !pred(c) {
                break;
            }
            self.bump();
        }
        &self.input[start..self.pos.offset]
    }

    pub fn skip_whitespace(&mut self) {
        self.take_while(char::is_whitespace);
    }

    /// Error for a missing construct at the cursor: `UnexpectedEnd` at end of
    /// input, `UnexpectedChar` otherwise.
    pub fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek_char() {
            Some(found) => ParseError::UnexpectedChar {
                pos: self.pos,
                expected: expected.to_string(),
                found,
            },
            None => ParseError::UnexpectedEnd {
                pos: self.pos,
                expected: expected.to_string(),
            },
        }
    }

    /// Read a maximal run of alphanumeric, `-` and `_` characters.
    pub fn read_identifier(&mut self) -> Result<&'a str, ParseError> {
        match self.peek_char() {
            Some(c) if is_ident_char(c) => Ok(self.take_while(is_ident_char)),
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Read an unsigned integer with an optional unit suffix from `units`,
    /// returning the value in milliseconds. A missing unit means milliseconds.
    pub fn read_number_with_unit(&mut self, units: &[&str]) -> Result<u64, ParseError> {
        let start = self.pos;
        let digits = self.take_while(|c| c.is_ascii_digit());
        if digits.is_empty() {
            let value = self.read_bare_token();
            return Err(ParseError::InvalidNumber {
                pos: start,
                value: value.to_string(),
            });
        }
        let value: u64 = digits.parse().map_err(|_| ParseError::InvalidNumber {
            pos: start,
            value: digits.to_string(),
        })?;

        let unit_pos = self.pos;
        let suffix = self.take_while(|c| c.is_ascii_alphabetic());
        if suffix.is_empty() {
            return Ok(value);
        }

        let factor = UNIT_FACTORS
            .iter()
            .find(|(unit, _)| *unit == suffix && units.contains(unit))
            .map(|(_, factor)| *factor);
        let Some(factor) = factor else {
            return Err(ParseError::UnexpectedChar {
                pos: unit_pos,
                expected: format!("unit ({})", units.join(", ")),
                found: suffix.chars().next().unwrap_or(' '),
            });
        };

        value.checked_mul(factor).ok_or_else(|| ParseError::InvalidNumber {
            pos: start,
            value: format!("{}{}", digits, suffix),
        })
    }

    /// Consume `literal` exactly.
    pub fn expect(&mut self, literal: &str) -> Result<(), ParseError> {
        if self.eat(literal) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{}'", literal)))
        }
    }

    /// Consume `literal` if present.
    pub fn eat(&mut self, literal: &str) -> bool {
        if !self.starts_with(literal) {
            return false;
        }
        for _ in literal.chars() {
            self.bump();
        }
        true
    }

    /// Read `[ ... ]` and return the text between the brackets.
    ///
    /// The first `]` closes the span; brackets do not nest.
    pub fn read_bracketed_raw(&mut self) -> Result<&'a str, ParseError> {
        self.expect("[")?;
        let inner = self.take_while(|c| c != ']');
        if self.at_end() {
            return Err(ParseError::UnexpectedEnd {
                pos: self.pos,
                expected: "']'".to_string(),
            });
        }
        self.bump();
        Ok(inner)
    }

    /// Read a selector or value argument.
    ///
    /// A token wrapped in `"` or `'` runs to the matching quote and is returned
    /// without quotes. Otherwise the token runs to the next whitespace, comma,
    /// or end of input, and may be empty.
    pub fn read_quoted_or_bare_token(&mut self) -> Result<&'a str, ParseError> {
        match self.peek_char() {
            Some(quote @ ('"' | '\'')) => {
                self.bump();
                let inner = self.take_while(|c| c != quote);
                if self.at_end() {
                    return Err(ParseError::UnexpectedEnd {
                        pos: self.pos,
                        expected: format!("closing {}", quote),
                    });
                }
                self.bump();
                Ok(inner)
            }
            _ => Ok(self.read_bare_token()),
        }
    }

    /// Read up to the next whitespace, comma, or end of input.
    pub fn read_bare_token(&mut self) -> &'a str {
        self.take_while(|c| !c.is_whitespace() && c != ',')
    }
}
