//! ctp-df - Catppuccin palettes for Dwarf Fortress
//!
//! A library for rendering colour themes into the sixteen-slot `colors.txt`
//! format, lightening or darkening slots without clipping their hue.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use config::{Config, CONFIG_FILENAME};
pub use error::{CtpError, Result};
pub use render::{format_colors_txt, slots_to_json, write_colors_txt, COLORS_TXT};
pub use types::{
    adjust, redistribute, Adjustment, Colour, Scheme, Slot, SlotMapping, Theme, ThemeSet,
    DEFAULT_FACTOR, DEFAULT_FLAVOURS,
};
