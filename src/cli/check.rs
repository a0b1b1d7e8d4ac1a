//! Check command implementation.
//!
//! Verifies that every theme in the catalogue defines each colour the slot
//! scheme refers to.

use clap::Args;

use crate::error::{CtpError, Result};
use crate::output::{plural, Printer};
use crate::types::{Scheme, ThemeSet};

use super::ConfigArgs;

/// Check that every theme defines the colours the slots need
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// A theme that lacks colours the scheme needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incomplete {
    pub theme: String,
    pub missing: Vec<String>,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let config = args.config.load()?;
    let themes = config.theme_set()?;
    let scheme = Scheme::dwarf_fortress();

    let problems = check_themes(&themes, &scheme);
    for theme in themes.iter() {
        match problems.iter().find(|p| p.theme == theme.name) {
            Some(problem) => {
                let missing = printer.dim(&problem.missing.join(", "));
                printer.error("Missing", &format!("{} {}", theme.name, missing));
            }
            None => printer.status("Checked", &theme.name),
        }
    }

    if problems.is_empty() {
        return Ok(());
    }

    Err(CtpError::Config {
        message: format!(
            "{} missing colours",
            plural(problems.len(), "theme is", "themes are")
        ),
        help: Some(format!(
            "Define the missing colours in {}",
            config
                .themes
                .as_ref()
                .map_or("the theme file".to_string(), |p| p.display().to_string())
        )),
    })
}

/// Find every theme that cannot be rendered through `scheme`.
pub fn check_themes(themes: &ThemeSet, scheme: &Scheme) -> Vec<Incomplete> {
    themes
        .iter()
        .filter_map(|theme| {
            let missing = scheme.missing_colours(theme);
            if missing.is_empty() {
                None
            } else {
                Some(Incomplete {
                    theme: theme.name.clone(),
                    missing: missing.into_iter().map(str::to_string).collect(),
                })
            }
        })
        .collect()
}
