//! hxattr: parsers for hypermedia attribute mini-languages.
//!
//! Turns trigger, swap and sync attribute strings into typed values for a
//! runtime to act on. Parsing is pure: no I/O, no shared state.

pub mod ast;
pub mod config;
pub mod error;
pub mod manifest;
pub mod position;
pub mod scanner;
pub mod swap;
pub mod sync;
pub mod trigger;

pub use ast::{Modifier, QueueMode, Selector, Strategy, SwapOptions, SyncStrategy, TriggerDef};
pub use config::{Config, OutputFormat};
pub use error::{Error, ParseError, Result};
pub use manifest::{parse_attr, AttrKind, CheckReport, Manifest, Parsed};
pub use position::Position;
pub use swap::SwapDefaults;
pub use trigger::parse_trigger;
