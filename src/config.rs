//! Compiler configuration — loads optional ~/.pdlc/config.yaml.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::html::HtmlOptions;

/// Configuration loaded from YAML. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page rendering options.
    pub html: HtmlOptions,
    /// Directory for generated pages. None = current directory.
    pub out_dir: Option<PathBuf>,
}

impl Config {
    /// The standard config path (~/.pdlc/config.yaml).
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".pdlc").join("config.yaml"))
    }

    /// Load from the standard path, falling back to defaults if it doesn't exist.
    pub fn load_default() -> Result<Self> {
        Self::load_or_default(Self::default_path().as_deref())
    }

    /// Load from `path` if it names an existing file, else the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path. A missing or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a YAML document. An empty document gives the defaults.
    pub fn parse(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }
}
