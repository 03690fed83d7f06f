//! Swap attribute parser.
//!
//! Syntax: `[strategy] [key:value ...]` where strategy is one of `innerHTML`,
//! `outerHTML`, `beforeBegin`, `afterBegin`, `beforeEnd`, `afterEnd`, `delete`,
//! `none`, and keys are `swap`, `settle`, `scroll`, `show`, `focus-scroll`,
//! `transition` and `ignoreTitle`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ast::{Strategy, SwapOptions};
use crate::error::ParseError;
use crate::scanner::{is_ident_char, Scanner, DURATION_UNITS};

/// Starting values for fields a swap attribute leaves unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapDefaults {
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default)]
    pub swap_delay: u64,
    #[serde(default)]
    pub settle_delay: u64,
}

impl Default for SwapDefaults {
    #[inline]
    fn default() -> Self {
        Self {
            strategy: Strategy::InnerHTML,
            swap_delay: 0,
            settle_delay: 0,
        }
    }
}

impl SwapOptions {
    /// Parse a swap attribute with the documented defaults.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, &SwapDefaults::default())
    }

    /// Parse a swap attribute, starting from `defaults`.
    ///
    /// Unknown keys and stray words are skipped. A known key with a malformed
    /// value is an error.
    pub fn parse_with(input: &str, defaults: &SwapDefaults) -> Result<Self, ParseError> {
        let mut opts = SwapOptions {
            strategy: defaults.strategy,
            swap_delay: defaults.swap_delay,
            settle_delay: defaults.settle_delay,
            ..Default::default()
        };
        let mut scanner = Scanner::new(input);
        let mut first = true;

        loop {
            scanner.skip_whitespace();
            if scanner.at_end() {
                break;
            }

            let start = scanner.position();
            if !scanner.peek_char().is_some_and(is_ident_char) {
                let word = scanner.read_bare_token();
                debug!(%start, word, "ignoring swap token");
                // a lone comma is not consumed by the bare token reader
                scanner.eat(",");
                first = false;
                continue;
            }

            let key = scanner.read_identifier()?;
            if !scanner.eat(":") {
                match Strategy::from_keyword(key) {
                    Some(strategy) if first => opts.strategy = strategy,
                    _ => {
                        let rest = scanner.read_bare_token();
                        debug!(%start, word = %format!("{}{}", key, rest), "ignoring swap word");
                    }
                }
                first = false;
                continue;
            }
            first = false;

            match key {
                "swap" => opts.swap_delay = scanner.read_number_with_unit(DURATION_UNITS)?,
                "settle" => opts.settle_delay = scanner.read_number_with_unit(DURATION_UNITS)?,
                "scroll" => opts.scroll = scanner.read_quoted_or_bare_token()?.to_string(),
                "show" => opts.show = scanner.read_quoted_or_bare_token()?.to_string(),
                "focus-scroll" => opts.focus_scroll = read_bool(&mut scanner, key)?,
                "transition" => opts.transition = read_bool(&mut scanner, key)?,
                "ignoreTitle" => opts.ignore_title = read_bool(&mut scanner, key)?,
                _ => {
                    // an unterminated quote has already consumed the rest of the input
                    let rest = scanner.rest();
                    let value = scanner.read_quoted_or_bare_token().unwrap_or(rest);
                    debug!(%start, key, value, "ignoring unknown swap key");
                }
            }
        }

        Ok(opts)
    }
}

fn read_bool(scanner: &mut Scanner<'_>, key: &str) -> Result<bool, ParseError> {
    let pos = scanner.position();
    match scanner.read_bare_token() {
        "true" => Ok(true),
        "false" => Ok(false),
        value => Err(ParseError::InvalidValue {
            pos,
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

impl FromStr for SwapOptions {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
