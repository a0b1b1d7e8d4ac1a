//! JSON output for resolved slots.

use serde::Serialize;

use crate::error::{CtpError, Result};
use crate::types::Slot;

#[derive(Serialize)]
struct SlotJson<'a> {
    slot: &'a str,
    hex: String,
    r: u8,
    g: u8,
    b: u8,
}

/// Render slots as a pretty-printed JSON array.
pub fn slots_to_json(slots: &[Slot<'_>]) -> Result<String> {
    let rows: Vec<SlotJson<'_>> = slots
        .iter()
        .map(|slot| SlotJson {
            slot: slot.name,
            hex: slot.colour.to_string(),
            r: slot.colour.r,
            g: slot.colour.g,
            b: slot.colour.b,
        })
        .collect();

    serde_json::to_string_pretty(&rows).map_err(|e| CtpError::Parse {
        message: format!("Failed to serialize slots: {}", e),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    #[test]
    fn test_slots_to_json() {
        let slots = [Slot {
            name: "black",
            colour: Colour::rgb(30, 30, 46),
        }];

        let json = slots_to_json(&slots).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["slot"], "black");
        assert_eq!(value[0]["hex"], "#1E1E2E");
        assert_eq!(value[0]["r"], 30);
        assert_eq!(value[0]["g"], 30);
        assert_eq!(value[0]["b"], 46);
    }
}
