//! Configuration Settings
//!
//! Optional `lark.toml` file read from the working directory. Every field
//! has a default, so running without a config file reads `tgt.lark` and
//! writes `docs/index.html`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lark_core::Format;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default configuration file name
pub const CONFIG_FILE: &str = "lark.toml";

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Lark source file
    pub input: PathBuf,
    /// Output file; derived from `format` when unset
    pub output: Option<PathBuf>,
    /// Output format (`html` or `markdown`)
    pub format: Format,
    /// Stylesheet linked from HTML pages
    pub stylesheet: String,
    /// Page template replacing the built-in one
    pub template: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from("tgt.lark"),
            output: None,
            format: Format::Html,
            stylesheet: "style.css".to_string(),
            template: None,
        }
    }
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings.
    ///
    /// An explicit `path` must exist. Without one, `lark.toml` in the
    /// working directory is used if present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                if !default.exists() {
                    debug!("no {} found, using defaults", CONFIG_FILE);
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let settings = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!(config = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Output path, defaulting to `docs/index.<ext>` for the format
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| Path::new("docs").join(format!("index.{}", self.format.extension())))
    }
}
