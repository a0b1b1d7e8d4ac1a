pub mod build;
pub mod check;
pub mod completions;
pub mod show;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;

/// ctp-df - Catppuccin palettes for Dwarf Fortress
#[derive(Parser, Debug)]
#[command(name = "ctp-df")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Defaults to `build` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate <flavour>/colors.txt for each theme
    Build(build::BuildArgs),

    /// Print one theme's colors.txt (or JSON) to stdout
    Show(show::ShowArgs),

    /// Check that every theme defines the colours the slots need
    Check(check::CheckArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Options shared by every command that reads themes.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// Config file (default: ./ctp-df.yaml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Extra theme file merged over the bundled palette
    #[arg(long, value_name = "FILE")]
    pub themes: Option<PathBuf>,

    /// Lighten/darken factor
    #[arg(long)]
    pub factor: Option<f64>,
}

impl ConfigArgs {
    /// Load the config file and apply command-line overrides.
    pub fn load(&self) -> Result<Config> {
        let mut config = Config::discover(self.config.as_deref())?;
        self.apply(&mut config);
        Ok(config)
    }

    /// Apply command-line overrides to a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(themes) = &self.themes {
            config.themes = Some(themes.clone());
        }
        if let Some(factor) = self.factor {
            config.factor = factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["ctp-df"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_build_flags() {
        let cli = Cli::try_parse_from([
            "ctp-df", "build", "-o", "out", "-f", "mocha", "-f", "latte", "--factor", "1.2",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Build(args)) => {
                assert_eq!(args.output, Some(PathBuf::from("out")));
                assert_eq!(args.flavours, vec!["mocha", "latte"]);
                assert_eq!(args.config.factor, Some(1.2));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_overrides_apply() {
        let args = ConfigArgs {
            themes: Some(PathBuf::from("extra.yaml")),
            factor: Some(2.0),
            ..Default::default()
        };
        let mut config = Config::default();
        args.apply(&mut config);

        assert_eq!(config.themes, Some(PathBuf::from("extra.yaml")));
        assert_eq!(config.factor, 2.0);
        assert_eq!(config.output, PathBuf::from("."));
    }
}
