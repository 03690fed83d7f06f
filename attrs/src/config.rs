//! Configuration for hxa.
//!
//! HXA_ROOT resolution order:
//! 1. Explicit path passed to Config::with_root()
//! 2. HXA_ROOT environment variable
//! 3. Platform config directory (e.g. ~/.config/hxa)

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::swap::SwapDefaults;
use crate::{Error, Result};

const CONFIG_FILE: &str = "config.toml";

/// How parsed values are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Pretty,
    Debug,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            "debug" => Ok(OutputFormat::Debug),
            other => Err(Error::Config(format!(
                "Unknown output format '{}' (expected json, pretty, or debug)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Debug => write!(f, "debug"),
        }
    }
}

/// hxa configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding config.toml; not stored in the file itself.
    #[serde(skip)]
    pub root: PathBuf,

    /// Output format for parsed values.
    #[serde(default)]
    pub format: OutputFormat,

    /// Values the swap parser starts from.
    #[serde(default)]
    pub swap: SwapDefaults,
}

impl Config {
    /// Default settings rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            format: OutputFormat::default(),
            swap: SwapDefaults::default(),
        }
    }

    /// Default settings rooted at the resolved hxa directory.
    pub fn default_location() -> Result<Self> {
        Ok(Self::with_root(resolve_root()?))
    }

    /// Settings from `config.toml` under the resolved hxa directory.
    pub fn load() -> Result<Self> {
        let root = resolve_root()?;
        Self::load_from(&root)
    }

    /// Settings from `root/config.toml`; a missing file gives the defaults.
    pub fn load_from(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::with_root(root));
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Ok(Self {
            root: root.to_path_buf(),
            ..config
        })
    }

    /// Write the settings to `config.toml`. The root directory is created on demand.
    pub fn save(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("cannot write settings: {}", e)))?;
        std::fs::write(self.config_path(), contents)?;
        Ok(())
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }
}

/// `HXA_ROOT`, then the platform config dir, then `~/.config/hxa`.
fn resolve_root() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("HXA_ROOT") {
        return Ok(PathBuf::from(path));
    }

    if let Some(proj_dirs) = ProjectDirs::from("", "", "hxa") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    let home = std::env::var("HOME")
        .map_err(|_| Error::Config("Could not determine home directory".to_string()))?;
    Ok(PathBuf::from(home).join(".config/hxa"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Strategy;
    use tempfile::TempDir;

    #[test]
    fn test_config_with_root() {
        let config = Config::with_root("/tmp/test-hxa");
        assert_eq!(config.root, PathBuf::from("/tmp/test-hxa"));
        assert_eq!(config.format, OutputFormat::Pretty);
        assert_eq!(config.swap, SwapDefaults::default());
        assert_eq!(config.config_path(), PathBuf::from("/tmp/test-hxa/config.toml"));
    }

    #[test]
    fn test_load_missing_is_default() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_from(tmp.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Pretty);
        assert_eq!(config.root, tmp.path());
    }

    #[test]
    fn test_config_save_load() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("nested");

        let mut config = Config::with_root(&root);
        config.format = OutputFormat::Json;
        config.swap.strategy = Strategy::OuterHTML;
        config.swap.settle_delay = 20;
        config.save().unwrap();

        let loaded = Config::load_from(&root).unwrap();
        assert_eq!(loaded.format, OutputFormat::Json);
        assert_eq!(loaded.swap, config.swap);
    }

    #[test]
    fn test_partial_config_file() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "[swap]\nsettle_delay = 20\n").unwrap();

        let config = Config::load_from(tmp.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Pretty);
        assert_eq!(config.swap.strategy, Strategy::InnerHTML);
        assert_eq!(config.swap.settle_delay, 20);
    }

    #[test]
    fn test_malformed_config_file() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "format = \"yaml\"\n").unwrap();

        let err = Config::load_from(tmp.path()).unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("config.toml")));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
