//! Sync attribute parser: `drop`, `replace`, `abort`, `queue`, or
//! `queue:first|last|all`.

use std::str::FromStr;

use crate::ast::{QueueMode, SyncStrategy};
use crate::error::ParseError;
use crate::scanner::Scanner;

impl SyncStrategy {
    /// Parse a sync attribute. A bare `queue` means `queue:last`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut scanner = Scanner::new(input);
        scanner.skip_whitespace();
        if scanner.at_end() {
            return Err(scanner.unexpected("sync strategy"));
        }

        let start = scanner.position();
        let Ok(word) = scanner.read_identifier() else {
            return Err(ParseError::InvalidModifier {
                pos: start,
                name: scanner.read_bare_token().to_string(),
            });
        };

        let strategy = match word {
            "drop" => SyncStrategy::Drop,
            "replace" => SyncStrategy::Replace,
            "abort" => SyncStrategy::Abort,
            "queue" if !scanner.starts_with(":") => SyncStrategy::Queue(QueueMode::QueueLast),
            "queue" => {
                scanner.expect(":")?;
                let pos = scanner.position();
                let mode = scanner.read_bare_token();
                match QueueMode::from_keyword(mode) {
                    Some(mode @ (QueueMode::QueueFirst | QueueMode::QueueLast | QueueMode::QueueAll)) => {
                        SyncStrategy::Queue(mode)
                    }
                    _ => {
                        return Err(ParseError::InvalidModifier {
                            pos,
                            name: mode.to_string(),
                        })
                    }
                }
            }
            _ => {
                return Err(ParseError::InvalidModifier {
                    pos: start,
                    name: format!("{}{}", word, scanner.read_bare_token()),
                })
            }
        };

        scanner.skip_whitespace();
        if !scanner.at_end() {
            return Err(scanner.unexpected("end of input"));
        }
        Ok(strategy)
    }
}

impl FromStr for SyncStrategy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
