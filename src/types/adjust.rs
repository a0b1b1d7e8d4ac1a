//! Brightness adjustment with overflow redistribution.
//!
//! Scaling a colour up can push one channel past 255. Clamping that channel
//! alone shifts the hue and washes out saturation, so instead the overflow is
//! spread across the other channels: the brightest channel is pulled down to
//! the ceiling and the rest move toward a shared gray point, keeping the
//! relative balance of the channels intact.

use serde::Serialize;

use crate::error::{CtpError, Result};
use crate::types::Colour;

/// Default lighten/darken factor.
pub const DEFAULT_FACTOR: f64 = 1.4;

/// Channel ceiling. Truncating anything at or below this yields at most 255.
const THRESHOLD: f64 = 255.999;

/// A brightness adjustment applied to a slot's source colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Adjustment {
    /// Multiply every channel by the factor.
    Lighten,
    /// Divide every channel by the factor.
    Darken,
}

impl Adjustment {
    /// Apply this adjustment to a colour.
    ///
    /// Darkening divides rather than multiplying by the reciprocal so the
    /// truncated channels match the published palettes bit for bit.
    pub fn apply(self, colour: Colour, factor: f64) -> Colour {
        match self {
            Adjustment::Lighten => adjust(colour, factor),
            Adjustment::Darken => {
                let [r, g, b] = colour.channels().map(f64::from);
                redistribute(r / factor, g / factor, b / factor)
            }
        }
    }

    /// Lower-case name, as used in diagnostics and JSON output.
    pub fn name(self) -> &'static str {
        match self {
            Adjustment::Lighten => "lighten",
            Adjustment::Darken => "darken",
        }
    }
}

/// Scale a colour by `factor` and redistribute any overflow.
///
/// `factor > 1` brightens, `factor < 1` darkens, `factor == 1` is the identity.
pub fn adjust(colour: Colour, factor: f64) -> Colour {
    let [r, g, b] = colour.channels().map(f64::from);
    redistribute(r * factor, g * factor, b * factor)
}

/// Bring real-valued channels back into byte range.
///
/// Channels at or below the ceiling are truncated as-is. Otherwise the
/// brightest channel is pulled to the ceiling and the others are raised
/// toward gray by the same linear map, or the result is white when there is
/// no headroom left.
pub fn redistribute(r: f64, g: f64, b: f64) -> Colour {
    let m = r.max(g).max(b);
    if m <= THRESHOLD {
        return Colour::rgb(truncate(r), truncate(g), truncate(b));
    }

    let total = r + g + b;
    if total >= 3.0 * THRESHOLD {
        return Colour::WHITE;
    }

    // Equal channels overflowing together would divide by zero below.
    let spread = 3.0 * m - total;
    if spread <= 0.0 {
        return Colour::WHITE;
    }

    let x = (3.0 * THRESHOLD - total) / spread;
    let gray = THRESHOLD - x * m;
    Colour::rgb(
        truncate(gray + x * r),
        truncate(gray + x * g),
        truncate(gray + x * b),
    )
}

/// Check that a factor is usable for lightening and darkening.
pub fn validate_factor(factor: f64) -> Result<f64> {
    if factor.is_finite() && factor > 0.0 {
        Ok(factor)
    } else {
        Err(CtpError::Config {
            message: format!("Invalid adjustment factor: {}", factor),
            help: Some(format!(
                "Use a positive number such as {}",
                DEFAULT_FACTOR
            )),
        })
    }
}

/// Truncate toward zero into byte range.
fn truncate(channel: f64) -> u8 {
    channel.clamp(0.0, 255.0) as u8
}
