//! Core domain types for ctp-df.
//!
//! This module contains the fundamental types used throughout the generator:
//! - `Colour` - RGB colour values
//! - `Adjustment` - Lighten/darken with overflow redistribution
//! - `Theme` / `ThemeSet` - Named colour collections and the bundled catalogue
//! - `Scheme` - The slot-to-colour mapping table

mod adjust;
mod colour;
mod scheme;
mod theme;

pub use adjust::{adjust, redistribute, validate_factor, Adjustment, DEFAULT_FACTOR};
pub use colour::Colour;
pub use scheme::{Scheme, Slot, SlotMapping};
pub use theme::{Theme, ThemeSet, DEFAULT_FLAVOURS};
