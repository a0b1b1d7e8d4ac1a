//! Themes: named colour collections, and the catalogue they are loaded from.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{CtpError, Result};

use super::Colour;

/// The bundled Catppuccin palette.
const CATPPUCCIN: &str = include_str!("../../assets/catppuccin.yaml");

/// Flavours generated by default, in output order.
pub const DEFAULT_FLAVOURS: [&str; 4] = ["latte", "frappe", "macchiato", "mocha"];

/// A named set of colours.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Theme name (e.g. "mocha")
    pub name: String,

    /// Colour name -> colour
    colours: BTreeMap<String, Colour>,
}

impl Theme {
    /// Create a new empty theme.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colours: BTreeMap::new(),
        }
    }

    /// Get a colour by name.
    pub fn get(&self, name: &str) -> Option<Colour> {
        self.colours.get(name).copied()
    }

    /// Get a colour by name, failing if the theme does not define it.
    pub fn require(&self, name: &str) -> Result<Colour> {
        self.get(name).ok_or_else(|| CtpError::MissingColour {
            theme: self.name.clone(),
            colour: name.to_string(),
        })
    }

    /// Add or replace a colour.
    pub fn insert(&mut self, name: impl Into<String>, colour: Colour) {
        self.colours.insert(name.into(), colour);
    }

    /// Builder-style variant of [`Theme::insert`].
    pub fn with(mut self, name: impl Into<String>, colour: Colour) -> Self {
        self.insert(name, colour);
        self
    }

    /// Get all colour names, sorted.
    pub fn colour_names(&self) -> impl Iterator<Item = &str> {
        self.colours.keys().map(|s| s.as_str())
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check if the theme is empty.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

/// A catalogue of themes keyed by name.
#[derive(Debug, Clone, Default)]
pub struct ThemeSet {
    themes: BTreeMap<String, Theme>,
}

impl ThemeSet {
    /// The bundled Catppuccin flavours.
    pub fn builtin() -> Result<Self> {
        Self::parse(CATPPUCCIN)
    }

    /// Load themes from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CtpError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read theme file: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse themes from YAML: `theme -> colour name -> "#hex"`.
    pub fn parse(content: &str) -> Result<Self> {
        let raw: BTreeMap<String, BTreeMap<String, String>> = serde_yaml::from_str(content)
            .map_err(|e| CtpError::Parse {
                message: format!("Invalid theme file: {}", e),
                help: Some("Expected a mapping of theme -> colour name -> \"#RRGGBB\"".to_string()),
            })?;

        let mut set = Self::default();
        for (name, colours) in raw {
            let mut theme = Theme::new(name.clone());
            for (colour_name, hex) in colours {
                let colour = Colour::from_hex(&hex).map_err(|e| CtpError::Parse {
                    message: format!("{}.{}: {}", name, colour_name, e),
                    help: Some("Use #RGB or #RRGGBB format".to_string()),
                })?;
                theme.insert(colour_name, colour);
            }
            set.insert(theme);
        }

        Ok(set)
    }

    /// Add a theme, replacing any theme with the same name.
    pub fn insert(&mut self, theme: Theme) {
        self.themes.insert(theme.name.clone(), theme);
    }

    /// Merge another set into this one. Themes in `other` win.
    pub fn merge(&mut self, other: ThemeSet) {
        self.themes.extend(other.themes);
    }

    /// Look up a theme by name.
    pub fn resolve(&self, name: &str) -> Result<&Theme> {
        self.themes.get(name).ok_or_else(|| CtpError::UnknownTheme {
            name: name.to_string(),
            help: Some(format!(
                "Available themes: {}",
                self.names().collect::<Vec<_>>().join(", ")
            )),
        })
    }

    /// Get all theme names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(|s| s.as_str())
    }

    /// Iterate over all themes, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.values()
    }

    /// Get the number of themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
