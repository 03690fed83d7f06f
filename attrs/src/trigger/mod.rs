//! Trigger attribute mini-language.
//!
//! # Syntax Overview
//!
//! Full pattern: `event [modifier ...] [, event [modifier ...] ...]`
//!
//! - **Event**: identifier such as `click`, `keyup`, `my-event`
//! - **Polling**: `every 2s` fires on an interval instead of an event
//! - **Flags**: `once`, `changed`, `consume`, `prevent`
//! - **Timing**: `delay:500ms`, `throttle:1s`, `debounce:250` (unit defaults to ms)
//! - **Filter**: `[ctrlKey && shiftKey]`, kept verbatim
//! - **Selectors**: `from:<sel>`, `target:<sel>` where `<sel>` is `this`, `body`,
//!   `window`, `document`, `closest <css>`, `find <css>`, `next <css>`,
//!   `previous <css>`, or any other CSS selector (quote it to include spaces)
//! - **Queueing**: `queue:drop|replace|first|last|all`

mod parser;

pub use parser::parse_trigger;
