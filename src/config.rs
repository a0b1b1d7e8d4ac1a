//! Project configuration (ctp-df.yaml) parsing.
//!
//! The config file is optional. It sets the output directory, which themes
//! to generate, the adjustment factor, and an extra theme file. Command-line
//! flags override anything set here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CtpError, Result};
use crate::types::{validate_factor, ThemeSet, DEFAULT_FACTOR, DEFAULT_FLAVOURS};

/// Config file looked up in the current directory.
pub const CONFIG_FILENAME: &str = "ctp-df.yaml";

/// Generator configuration loaded from ctp-df.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output directory; one sub-directory per theme is created inside it.
    pub output: PathBuf,

    /// Themes to generate, in order.
    pub flavours: Vec<String>,

    /// Lighten/darken factor.
    pub factor: f64,

    /// Extra theme file merged over the bundled palette.
    pub themes: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            flavours: DEFAULT_FLAVOURS.iter().map(|s| s.to_string()).collect(),
            factor: DEFAULT_FACTOR,
            themes: None,
        }
    }
}

impl Config {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CtpError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let mut config = Self::parse(&content)?;

        // Relative theme paths are relative to the config file.
        if let Some(themes) = config.themes.take() {
            config.themes = Some(match path.parent() {
                Some(dir) if themes.is_relative() => dir.join(themes),
                _ => themes,
            });
        }

        Ok(config)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content).map_err(|e| CtpError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;

        validate_factor(config.factor)?;
        Ok(config)
    }

    /// Load the config named on the command line, or the default file if present.
    ///
    /// An explicitly named file must exist; the default file is optional.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(CONFIG_FILENAME);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// The bundled themes, with the configured theme file merged over them.
    pub fn theme_set(&self) -> Result<ThemeSet> {
        let mut set = ThemeSet::builtin()?;
        if let Some(path) = &self.themes {
            set.merge(ThemeSet::load(path)?);
        }
        Ok(set)
    }
}
