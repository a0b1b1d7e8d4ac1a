//! Slot schemes: which theme colour fills each output slot.

use std::collections::HashSet;

use crate::error::{CtpError, Result};

use super::{Adjustment, Colour, Theme};

/// One row of a scheme: an output slot and the theme colour that fills it.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotMapping {
    /// Output slot name (e.g. "lgreen")
    pub slot: String,
    /// Theme colour name (e.g. "green")
    pub colour: String,
    /// Optional brightness adjustment
    pub adjustment: Option<Adjustment>,
}

impl SlotMapping {
    /// Map a slot directly to a theme colour.
    pub fn new(slot: impl Into<String>, colour: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            colour: colour.into(),
            adjustment: None,
        }
    }

    /// Map a slot to a lightened theme colour.
    pub fn lighten(slot: impl Into<String>, colour: impl Into<String>) -> Self {
        Self {
            adjustment: Some(Adjustment::Lighten),
            ..Self::new(slot, colour)
        }
    }

    /// Map a slot to a darkened theme colour.
    pub fn darken(slot: impl Into<String>, colour: impl Into<String>) -> Self {
        Self {
            adjustment: Some(Adjustment::Darken),
            ..Self::new(slot, colour)
        }
    }
}

/// A resolved output slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<'a> {
    pub name: &'a str,
    pub colour: Colour,
}

/// An ordered mapping table from output slots to theme colours.
#[derive(Debug, Clone, PartialEq)]
pub struct Scheme {
    mappings: Vec<SlotMapping>,
}

impl Scheme {
    /// Create a scheme, rejecting duplicate slot names.
    pub fn new(mappings: Vec<SlotMapping>) -> Result<Self> {
        let mut seen = HashSet::new();
        for mapping in &mappings {
            if !seen.insert(mapping.slot.as_str()) {
                return Err(CtpError::Config {
                    message: format!("Duplicate slot in scheme: {}", mapping.slot),
                    help: Some("Each slot may appear only once".to_string()),
                });
            }
        }

        Ok(Self { mappings })
    }

    /// The sixteen Dwarf Fortress `colors.txt` slots.
    pub fn dwarf_fortress() -> Self {
        Self {
            mappings: vec![
                SlotMapping::new("black", "base"),
                SlotMapping::new("blue", "blue"),
                SlotMapping::new("green", "green"),
                SlotMapping::new("cyan", "teal"),
                SlotMapping::new("red", "red"),
                SlotMapping::new("magenta", "mauve"),
                SlotMapping::darken("brown", "rosewater"),
                SlotMapping::new("lgray", "overlay2"),
                SlotMapping::new("dgray", "surface2"),
                SlotMapping::new("lblue", "sky"),
                SlotMapping::lighten("lgreen", "green"),
                SlotMapping::lighten("lcyan", "teal"),
                SlotMapping::new("lred", "pink"),
                SlotMapping::new("lmagenta", "lavender"),
                SlotMapping::new("yellow", "yellow"),
                SlotMapping::new("white", "text"),
            ],
        }
    }

    /// The mapping rows, in output order.
    pub fn mappings(&self) -> &[SlotMapping] {
        &self.mappings
    }

    /// Get the number of slots.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Check if the scheme has no slots.
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Resolve every slot against a theme, in scheme order.
    pub fn render<'a>(&'a self, theme: &Theme, factor: f64) -> Result<Vec<Slot<'a>>> {
        self.mappings
            .iter()
            .map(|mapping| {
                let colour = theme.require(&mapping.colour)?;
                let colour = match mapping.adjustment {
                    Some(adjustment) => adjustment.apply(colour, factor),
                    None => colour,
                };
                Ok(Slot {
                    name: &mapping.slot,
                    colour,
                })
            })
            .collect()
    }

    /// Colour names this scheme needs that the theme does not define.
    ///
    /// Each name is reported once, in first-use order.
    pub fn missing_colours<'a>(&'a self, theme: &Theme) -> Vec<&'a str> {
        let mut missing: Vec<&str> = Vec::new();
        for mapping in &self.mappings {
            let name = mapping.colour.as_str();
            if theme.get(name).is_none() && !missing.contains(&name) {
                missing.push(name);
            }
        }
        missing
    }
}

impl Default for Scheme {
    fn default() -> Self {
        Self::dwarf_fortress()
    }
}
