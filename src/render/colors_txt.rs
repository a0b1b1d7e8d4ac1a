//! Dwarf Fortress `colors.txt` output.
//!
//! Each slot becomes three tokens, one per channel:
//!
//! ```text
//! [BLACK_R:30]
//! [BLACK_G:30]
//! [BLACK_B:46]
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{CtpError, Result};
use crate::types::Slot;

/// File name written inside each theme directory.
pub const COLORS_TXT: &str = "colors.txt";

/// Format slots as `colors.txt` content, three lines per slot in slot order.
pub fn format_colors_txt(slots: &[Slot<'_>]) -> String {
    let mut out = String::with_capacity(slots.len() * 3 * 16);
    for slot in slots {
        let name = slot.name.to_uppercase();
        let [r, g, b] = slot.colour.channels();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "[{}_R:{}]", name, r);
        let _ = writeln!(out, "[{}_G:{}]", name, g);
        let _ = writeln!(out, "[{}_B:{}]", name, b);
    }
    out
}

/// Write slots to a `colors.txt` file, creating parent directories as needed.
pub fn write_colors_txt(slots: &[Slot<'_>], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CtpError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    fs::write(path, format_colors_txt(slots)).map_err(|e| CtpError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write {}: {}", COLORS_TXT, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn slots() -> Vec<Slot<'static>> {
        vec![
            Slot {
                name: "black",
                colour: Colour::rgb(30, 30, 46),
            },
            Slot {
                name: "lgreen",
                colour: Colour::rgb(206, 255, 202),
            },
        ]
    }

    #[test]
    fn test_format_colors_txt() {
        let expected = "\
[BLACK_R:30]
[BLACK_G:30]
[BLACK_B:46]
[LGREEN_R:206]
[LGREEN_G:255]
[LGREEN_B:202]
";
        assert_eq!(format_colors_txt(&slots()), expected);
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_colors_txt(&[]), "");
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mocha").join(COLORS_TXT);

        write_colors_txt(&slots(), &path).unwrap();
        // A second write over an existing directory is fine.
        write_colors_txt(&slots(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, format_colors_txt(&slots()));
        assert_eq!(content.lines().count(), 6);
    }

    #[test]
    fn test_write_into_file_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("mocha");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_colors_txt(&slots(), &blocker.join(COLORS_TXT)).unwrap_err();
        assert!(matches!(err, CtpError::Io { .. }));
    }
}
