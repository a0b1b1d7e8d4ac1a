//! Output formats for resolved slots.

mod colors_txt;
mod json;

pub use colors_txt::{format_colors_txt, write_colors_txt, COLORS_TXT};
pub use json::slots_to_json;
