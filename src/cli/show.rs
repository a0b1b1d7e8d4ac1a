//! Show command implementation.
//!
//! Prints a single theme's rendered slots to stdout without touching the
//! filesystem.

use clap::Args;

use crate::error::Result;
use crate::render::{format_colors_txt, slots_to_json};
use crate::types::{validate_factor, Scheme};

use super::ConfigArgs;

/// Print one theme's colors.txt to stdout
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Theme to render (e.g. mocha)
    pub flavour: String,

    /// Print JSON instead of colors.txt
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}

pub fn run(args: ShowArgs) -> Result<()> {
    print!("{}", render(&args)?);
    Ok(())
}

/// Render the requested theme in the requested format.
pub fn render(args: &ShowArgs) -> Result<String> {
    let config = args.config.load()?;
    let factor = validate_factor(config.factor)?;
    let themes = config.theme_set()?;
    let theme = themes.resolve(&args.flavour)?;

    let scheme = Scheme::dwarf_fortress();
    let slots = scheme.render(theme, factor)?;

    if args.json {
        let mut json = slots_to_json(&slots)?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(format_colors_txt(&slots))
    }
}
