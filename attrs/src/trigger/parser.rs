//! Trigger attribute parser.

use tracing::trace;

use crate::ast::{Modifier, QueueMode, Selector, TriggerDef};
use crate::error::ParseError;
use crate::scanner::{is_ident_char, Scanner, DURATION_UNITS};

/// Parse a trigger attribute into its comma-separated clauses.
///
/// The first error aborts the parse.
pub fn parse_trigger(input: &str) -> Result<Vec<TriggerDef>, ParseError> {
    let mut scanner = Scanner::new(input);
    let mut defs = Vec::new();

    loop {
        let def = parse_clause(&mut scanner)?;
        trace!(event = %def.event_name, modifiers = def.modifiers.len(), "parsed trigger clause");
        defs.push(def);

        scanner.skip_whitespace();
        if scanner.at_end() {
            break;
        }
        // A trailing comma fails on the next clause's missing event name
        scanner.expect(",")?;
    }

    Ok(defs)
}

/// Parse one clause: an event name followed by modifiers up to `,` or end.
fn parse_clause(scanner: &mut Scanner<'_>) -> Result<TriggerDef, ParseError> {
    scanner.skip_whitespace();
    if !scanner.peek_char().is_some_and(is_ident_char) {
        return Err(scanner.unexpected("event name"));
    }
    let mut def = TriggerDef::new(scanner.read_identifier()?);

    // `every <interval>` polls; without a number `every` is a plain event
    if def.event_name == "every" {
        scanner.skip_whitespace();
        if scanner.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            let interval = scanner.read_number_with_unit(DURATION_UNITS)?;
            def.modifiers.push(Modifier::Every(interval));
        }
    }

    loop {
        scanner.skip_whitespace();
        match scanner.peek_char() {
            None | Some(',') => break,
            Some('[') => {
                let raw = scanner.read_bracketed_raw()?;
                def.modifiers.push(Modifier::Filter(raw.to_string()));
            }
            Some(_) => {
                let modifier = parse_modifier(scanner)?;
                def.modifiers.push(modifier);
            }
        }
    }

    Ok(def)
}

/// Parse a keyword modifier (`once`) or a `key:value` modifier (`delay:1s`).
fn parse_modifier(scanner: &mut Scanner<'_>) -> Result<Modifier, ParseError> {
    let start = scanner.position();
    let Ok(word) = scanner.read_identifier() else {
        return Err(ParseError::InvalidModifier {
            pos: start,
            name: scanner.read_bare_token().to_string(),
        });
    };

    if !scanner.eat(":") {
        return match word {
            "once" => Ok(Modifier::Once),
            "changed" => Ok(Modifier::Changed),
            "consume" => Ok(Modifier::Consume),
            "prevent" => Ok(Modifier::Prevent),
            _ => Err(ParseError::InvalidModifier {
                pos: start,
                name: word.to_string(),
            }),
        };
    }

    match word {
        "delay" => Ok(Modifier::Delay(scanner.read_number_with_unit(DURATION_UNITS)?)),
        "throttle" => Ok(Modifier::Throttle(scanner.read_number_with_unit(DURATION_UNITS)?)),
        "debounce" => Ok(Modifier::Debounce(scanner.read_number_with_unit(DURATION_UNITS)?)),
        "from" => Ok(Modifier::From(parse_selector(scanner)?)),
        "target" => Ok(Modifier::Target(parse_selector(scanner)?)),
        "queue" => {
            let pos = scanner.position();
            let value = scanner.read_bare_token();
            QueueMode::from_keyword(value)
                .map(Modifier::Queue)
                .ok_or_else(|| ParseError::InvalidModifier {
                    pos,
                    name: value.to_string(),
                })
        }
        _ => Err(ParseError::InvalidModifier {
            pos: start,
            name: word.to_string(),
        }),
    }
}

/// Parse a selector argument of `from:` or `target:`.
///
/// Reserved keywords map to their variants; `closest`, `find`, `next` and
/// `previous` take the following token as their argument. Anything else is a
/// CSS selector. A quoted token is always a CSS selector.
fn parse_selector(scanner: &mut Scanner<'_>) -> Result<Selector, ParseError> {
    let start = scanner.position();

    if matches!(scanner.peek_char(), Some('"' | '\'')) {
        let css = scanner.read_quoted_or_bare_token()?;
        if css.is_empty() {
            return Err(ParseError::InvalidSelector {
                pos: start,
                value: String::new(),
            });
        }
        return Ok(Selector::Css(css.to_string()));
    }

    let token = scanner.read_bare_token();
    let relative: fn(String) -> Selector = match token {
        "this" => return Ok(Selector::This),
        "body" => return Ok(Selector::Body),
        "window" => return Ok(Selector::Window),
        "document" => return Ok(Selector::Document),
        "closest" => Selector::Closest,
        "find" => Selector::Find,
        "next" => Selector::Next,
        "previous" => Selector::Previous,
        "" => {
            return Err(ParseError::InvalidSelector {
                pos: start,
                value: String::new(),
            })
        }
        css => return Ok(Selector::Css(css.to_string())),
    };

    scanner.skip_whitespace();
    let arg_pos = scanner.position();
    let arg = scanner.read_quoted_or_bare_token()?;
    if arg.is_empty() {
        return Err(ParseError::InvalidSelector {
            pos: arg_pos,
            value: token.to_string(),
        });
    }
    Ok(relative(arg.to_string()))
}
