//! Attribute manifests: batches of attribute strings to validate.
//!
//! ```toml
//! [[attribute]]
//! name = "hx-trigger"
//! value = "click once, keyup[ctrlKey] delay:500ms"
//!
//! [[attribute]]
//! name = "data-hx-swap"
//! value = "outerHTML settle:1s"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ast::{SwapOptions, SyncStrategy, TriggerDef};
use crate::config::Config;
use crate::error::ParseError;
use crate::trigger::parse_trigger;
use crate::{Error, Result};

/// Which mini-language an attribute is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttrKind {
    Trigger,
    Swap,
    Sync,
}

impl AttrKind {
    /// Kind for an attribute name such as `hx-trigger` or `data-hx-swap`.
    pub fn from_attr_name(name: &str) -> Option<Self> {
        let bare = name.strip_prefix("data-").unwrap_or(name);
        match bare.strip_prefix("hx-")? {
            "trigger" => Some(AttrKind::Trigger),
            "swap" => Some(AttrKind::Swap),
            "sync" => Some(AttrKind::Sync),
            _ => None,
        }
    }
}

/// A single attribute entry from a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrEntry {
    pub name: String,
    pub value: String,
}

/// A successfully parsed attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "ast", rename_all = "lowercase")]
pub enum Parsed {
    Trigger(Vec<TriggerDef>),
    Swap(SwapOptions),
    Sync(SyncStrategy),
}

/// Result of checking one manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub name: String,
    pub value: String,
    pub outcome: std::result::Result<Parsed, ParseError>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    attribute: Vec<AttrEntry>,
}

/// A list of attributes to validate.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    entries: Vec<(AttrKind, AttrEntry)>,
}

impl Manifest {
    /// Load a manifest from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse a manifest from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self> {
        let file: ManifestFile = toml::from_str(toml_str)
            .map_err(|e| Error::Manifest(format!("Failed to parse manifest: {}", e)))?;

        let entries = file
            .attribute
            .into_iter()
            .map(|entry| match AttrKind::from_attr_name(&entry.name) {
                Some(kind) => Ok((kind, entry)),
                None => Err(Error::Manifest(format!("Unknown attribute '{}'", entry.name))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse every entry. Failures are reported per entry; checking continues.
    pub fn check(&self, config: &Config) -> Vec<CheckReport> {
        self.entries
            .iter()
            .map(|(kind, entry)| CheckReport {
                name: entry.name.clone(),
                value: entry.value.clone(),
                outcome: parse_attr(*kind, &entry.value, config),
            })
            .collect()
    }
}

/// Parse `value` as an attribute of the given kind.
pub fn parse_attr(kind: AttrKind, value: &str, config: &Config) -> std::result::Result<Parsed, ParseError> {
    match kind {
        AttrKind::Trigger => parse_trigger(value).map(Parsed::Trigger),
        AttrKind::Swap => SwapOptions::parse_with(value, &config.swap).map(Parsed::Swap),
        AttrKind::Sync => SyncStrategy::parse(value).map(Parsed::Sync),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{QueueMode, Strategy};
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
[[attribute]]
name = "hx-trigger"
value = "click once"

[[attribute]]
name = "data-hx-swap"
value = "outerHTML swap:1s"

[[attribute]]
name = "hx-sync"
value = "queue:first"

[[attribute]]
name = "hx-trigger"
value = "click badmod"
"#;

    #[test]
    fn test_attr_kind_names() {
        assert_eq!(AttrKind::from_attr_name("hx-trigger"), Some(AttrKind::Trigger));
        assert_eq!(AttrKind::from_attr_name("data-hx-swap"), Some(AttrKind::Swap));
        assert_eq!(AttrKind::from_attr_name("hx-sync"), Some(AttrKind::Sync));
        assert_eq!(AttrKind::from_attr_name("hx-get"), None);
        assert_eq!(AttrKind::from_attr_name("trigger"), None);
    }

    #[test]
    fn test_check_continues_past_failures() {
        let manifest = Manifest::parse(SAMPLE).unwrap();
        assert_eq!(manifest.len(), 4);

        let reports = manifest.check(&Config::with_root("/tmp/unused"));
        assert_eq!(reports.len(), 4);
        assert!(reports[0].is_ok());
        assert_eq!(
            reports[1].outcome,
            Ok(Parsed::Swap(SwapOptions {
                strategy: Strategy::OuterHTML,
                swap_delay: 1_000,
                ..Default::default()
            }))
        );
        assert_eq!(reports[2].outcome, Ok(Parsed::Sync(SyncStrategy::Queue(QueueMode::QueueFirst))));
        assert!(matches!(reports[3].outcome, Err(ParseError::InvalidModifier { .. })));
    }

    #[test]
    fn test_swap_uses_config_defaults() {
        let mut config = Config::with_root("/tmp/unused");
        config.swap.settle_delay = 20;
        let parsed = parse_attr(AttrKind::Swap, "innerHTML", &config).unwrap();
        assert!(matches!(parsed, Parsed::Swap(ref opts) if opts.settle_delay == 20));
    }

    #[test]
    fn test_unknown_attribute_rejected() {
        let err = Manifest::parse("[[attribute]]\nname = \"hx-post\"\nvalue = \"/x\"\n").unwrap_err();
        assert!(matches!(err, Error::Manifest(_)));
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("attrs.toml");
        std::fs::write(&path, SAMPLE).unwrap();
        assert_eq!(Manifest::load(&path).unwrap().len(), 4);

        let missing = Manifest::load(&tmp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, Error::NotFound(_)));
    }
}
