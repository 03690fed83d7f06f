//! Parsed attribute values.
//!
//! Every node is a plain value built once by its parser and handed to the
//! caller. `Display` prints canonical source text that parses back to an
//! equal value.

use std::fmt;

use serde::Serialize;

/// One event clause of a trigger attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerDef {
    /// Event name, never empty.
    pub event_name: String,
    /// Modifiers in source order; repeats are kept.
    pub modifiers: Vec<Modifier>,
}

/// A qualifier attached to a trigger clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum Modifier {
    Once,
    Changed,
    Consume,
    Prevent,
    /// Milliseconds.
    Delay(u64),
    /// Milliseconds.
    Throttle(u64),
    /// Milliseconds.
    Debounce(u64),
    From(Selector),
    Target(Selector),
    /// Filter expression, without the enclosing brackets.
    Filter(String),
    Queue(QueueMode),
    /// Polling interval in milliseconds for an `every` clause.
    Every(u64),
}

/// Element reference relative to the triggering element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Selector {
    This,
    Body,
    Window,
    Document,
    Closest(String),
    Find(String),
    Next(String),
    Previous(String),
    /// Any other CSS selector, verbatim.
    Css(String),
}

/// Which pending request survives when requests overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QueueMode {
    Drop,
    Replace,
    QueueFirst,
    QueueLast,
    QueueAll,
}

/// How response content is spliced into the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, serde::Deserialize)]
pub enum Strategy {
    #[default]
    InnerHTML,
    OuterHTML,
    BeforeBegin,
    AfterBegin,
    BeforeEnd,
    AfterEnd,
    Delete,
    None,
}

/// Parsed swap attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapOptions {
    pub strategy: Strategy,
    /// Milliseconds.
    pub swap_delay: u64,
    /// Milliseconds.
    pub settle_delay: u64,
    pub scroll: String,
    pub show: String,
    pub focus_scroll: bool,
    pub transition: bool,
    pub ignore_title: bool,
}

impl Default for SwapOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::InnerHTML,
            swap_delay: 0,
            settle_delay: 0,
            scroll: String::new(),
            show: String::new(),
            focus_scroll: true,
            transition: false,
            ignore_title: false,
        }
    }
}

/// How overlapping requests from one element are serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum SyncStrategy {
    Drop,
    Replace,
    Abort,
    Queue(QueueMode),
}

impl TriggerDef {
    /// A clause with no modifiers.
    pub fn new(event_name: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            modifiers: Vec::new(),
        }
    }

    /// Last modifier in source order for which `f` returns a value.
    fn last<'a, T>(&'a self, f: impl Fn(&'a Modifier) -> Option<T>) -> Option<T> {
        self.modifiers.iter().rev().find_map(f)
    }

    fn has(&self, modifier: &Modifier) -> bool {
        self.modifiers.contains(modifier)
    }

    pub fn delay(&self) -> Option<u64> {
        self.last(|m| match m {
            Modifier::Delay(ms) => Some(*ms),
            _ => None,
        })
    }

    pub fn throttle(&self) -> Option<u64> {
        self.last(|m| match m {
            Modifier::Throttle(ms) => Some(*ms),
            _ => None,
        })
    }

    pub fn debounce(&self) -> Option<u64> {
        self.last(|m| match m {
            Modifier::Debounce(ms) => Some(*ms),
            _ => None,
        })
    }

    pub fn poll_interval(&self) -> Option<u64> {
        self.last(|m| match m {
            Modifier::Every(ms) => Some(*ms),
            _ => None,
        })
    }

    pub fn from(&self) -> Option<&Selector> {
        self.last(|m| match m {
            Modifier::From(sel) => Some(sel),
            _ => None,
        })
    }

    pub fn target(&self) -> Option<&Selector> {
        self.last(|m| match m {
            Modifier::Target(sel) => Some(sel),
            _ => None,
        })
    }

    pub fn filter(&self) -> Option<&str> {
        self.last(|m| match m {
            Modifier::Filter(raw) => Some(raw.as_str()),
            _ => None,
        })
    }

    pub fn queue(&self) -> Option<QueueMode> {
        self.last(|m| match m {
            Modifier::Queue(mode) => Some(*mode),
            _ => None,
        })
    }

    pub fn is_once(&self) -> bool {
        self.has(&Modifier::Once)
    }

    pub fn is_changed(&self) -> bool {
        self.has(&Modifier::Changed)
    }

    pub fn is_consume(&self) -> bool {
        self.has(&Modifier::Consume)
    }

    pub fn is_prevent(&self) -> bool {
        self.has(&Modifier::Prevent)
    }
}

impl QueueMode {
    /// Mode for a `queue:` keyword.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "drop" => Some(QueueMode::Drop),
            "replace" => Some(QueueMode::Replace),
            "first" => Some(QueueMode::QueueFirst),
            "last" => Some(QueueMode::QueueLast),
            "all" => Some(QueueMode::QueueAll),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            QueueMode::Drop => "drop",
            QueueMode::Replace => "replace",
            QueueMode::QueueFirst => "first",
            QueueMode::QueueLast => "last",
            QueueMode::QueueAll => "all",
        }
    }
}

impl Strategy {
    pub const ALL: [Strategy; 8] = [
        Strategy::InnerHTML,
        Strategy::OuterHTML,
        Strategy::BeforeBegin,
        Strategy::AfterBegin,
        Strategy::BeforeEnd,
        Strategy::AfterEnd,
        Strategy::Delete,
        Strategy::None,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Strategy::InnerHTML => "innerHTML",
            Strategy::OuterHTML => "outerHTML",
            Strategy::BeforeBegin => "beforeBegin",
            Strategy::AfterBegin => "afterBegin",
            Strategy::BeforeEnd => "beforeEnd",
            Strategy::AfterEnd => "afterEnd",
            Strategy::Delete => "delete",
            Strategy::None => "none",
        }
    }

    /// Match a strategy keyword, ignoring ASCII case.
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.keyword().eq_ignore_ascii_case(word))
    }
}

/// Keywords the selector grammar reserves; a CSS selector spelled like one
/// has to be quoted.
const SELECTOR_KEYWORDS: &[&str] = &[
    "this", "body", "window", "document", "closest", "find", "next", "previous",
];

/// Write `token` so that `read_quoted_or_bare_token` returns it unchanged.
fn write_token(f: &mut fmt::Formatter<'_>, token: &str, reserved: &[&str]) -> fmt::Result {
    let needs_quotes = token.is_empty()
        || token.starts_with(|c: char| c == '"' || c == '\'')
        || token.contains(|c: char| c.is_whitespace() || c == ',')
        || reserved.contains(&token);
    if !needs_quotes {
        return f.write_str(token);
    }
    let quote = if token.contains('"') { '\'' } else { '"' };
    write!(f, "{}{}{}", quote, token, quote)
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::This => f.write_str("this"),
            Selector::Body => f.write_str("body"),
            Selector::Window => f.write_str("window"),
            Selector::Document => f.write_str("document"),
            Selector::Closest(s) => {
                f.write_str("closest ")?;
                write_token(f, s, &[])
            }
            Selector::Find(s) => {
                f.write_str("find ")?;
                write_token(f, s, &[])
            }
            Selector::Next(s) => {
                f.write_str("next ")?;
                write_token(f, s, &[])
            }
            Selector::Previous(s) => {
                f.write_str("previous ")?;
                write_token(f, s, &[])
            }
            Selector::Css(s) => write_token(f, s, SELECTOR_KEYWORDS),
        }
    }
}

impl fmt::Display for QueueMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for Modifier {
    /// `Every` prints only its interval, since it follows the `every` event name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Once => f.write_str("once"),
            Modifier::Changed => f.write_str("changed"),
            Modifier::Consume => f.write_str("consume"),
            Modifier::Prevent => f.write_str("prevent"),
            Modifier::Delay(ms) => write!(f, "delay:{}ms", ms),
            Modifier::Throttle(ms) => write!(f, "throttle:{}ms", ms),
            Modifier::Debounce(ms) => write!(f, "debounce:{}ms", ms),
            Modifier::From(sel) => write!(f, "from:{}", sel),
            Modifier::Target(sel) => write!(f, "target:{}", sel),
            Modifier::Filter(raw) => write!(f, "[{}]", raw),
            Modifier::Queue(mode) => write!(f, "queue:{}", mode),
            Modifier::Every(ms) => write!(f, "{}ms", ms),
        }
    }
}

impl fmt::Display for TriggerDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.event_name)?;
        for modifier in &self.modifiers {
            write!(f, " {}", modifier)?;
        }
        Ok(())
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for SwapOptions {
    /// Prints the strategy followed by every field that differs from its default.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.strategy)?;
        if self.swap_delay != 0 {
            write!(f, " swap:{}ms", self.swap_delay)?;
        }
        if self.settle_delay != 0 {
            write!(f, " settle:{}ms", self.settle_delay)?;
        }
        if !self.scroll.is_empty() {
            f.write_str(" scroll:")?;
            write_token(f, &self.scroll, &[])?;
        }
        if !self.show.is_empty() {
            f.write_str(" show:")?;
            write_token(f, &self.show, &[])?;
        }
        if !self.focus_scroll {
            f.write_str(" focus-scroll:false")?;
        }
        if self.transition {
            f.write_str(" transition:true")?;
        }
        if self.ignore_title {
            f.write_str(" ignoreTitle:true")?;
        }
        Ok(())
    }
}

impl fmt::Display for SyncStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncStrategy::Drop => f.write_str("drop"),
            SyncStrategy::Replace => f.write_str("replace"),
            SyncStrategy::Abort => f.write_str("abort"),
            SyncStrategy::Queue(mode) => write!(f, "queue:{}", mode),
        }
    }
}
