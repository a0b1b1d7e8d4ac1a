//! Build command implementation.
//!
//! Renders each selected theme through the slot scheme and writes
//! `<output>/<theme>/colors.txt`.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::{write_colors_txt, COLORS_TXT};
use crate::types::{validate_factor, Scheme};

use super::ConfigArgs;

/// Generate colors.txt files
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Output directory (default: current directory)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Theme to generate; repeat for several (default: all four flavours)
    #[arg(long = "flavour", short = 'f', value_name = "NAME")]
    pub flavours: Vec<String>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl BuildArgs {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = self.config.load()?;
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if !self.flavours.is_empty() {
            config.flavours = self.flavours.clone();
        }
        Ok(config)
    }
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let config = args.resolve_config()?;
    let written = generate(&config, printer)?;

    printer.status(
        "Finished",
        &format!(
            "{} in {}",
            plural(written.len(), "palette", "palettes"),
            display_path(&config.output)
        ),
    );

    Ok(())
}

/// Write one colors.txt per configured theme and return the paths written.
///
/// Every theme is resolved before anything is written, so an unknown theme
/// name or a theme missing a colour leaves the output directory untouched.
pub fn generate(config: &Config, printer: &Printer) -> Result<Vec<PathBuf>> {
    let factor = validate_factor(config.factor)?;
    let themes = config.theme_set()?;
    let scheme = Scheme::dwarf_fortress();

    let rendered = config
        .flavours
        .iter()
        .map(|name| {
            let theme = themes.resolve(name)?;
            Ok((name, scheme.render(theme, factor)?))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut written = Vec::with_capacity(rendered.len());
    for (name, slots) in rendered {
        let path = config.output.join(name).join(COLORS_TXT);
        write_colors_txt(&slots, &path)?;

        printer.status(
            "Generated",
            &format!(
                "{} {}",
                display_path(&path),
                printer.dim(&format!("({})", plural(slots.len(), "slot", "slots")))
            ),
        );
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CtpError;
    use crate::types::DEFAULT_FLAVOURS;
    use std::fs;
    use tempfile::tempdir;

    fn config_in(output: PathBuf) -> Config {
        Config {
            output,
            ..Default::default()
        }
    }

    fn is_colour_line(line: &str) -> bool {
        let Some(inner) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) else {
            return false;
        };
        let Some((key, value)) = inner.split_once(':') else {
            return false;
        };
        let Some((slot, channel)) = key.rsplit_once('_') else {
            return false;
        };

        !slot.is_empty()
            && slot.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
            && matches!(channel, "R" | "G" | "B")
            && (1..=3).contains(&value.len())
            && value.chars().all(|c| c.is_ascii_digit())
            && value.parse::<u16>().map_or(false, |v| v <= 255)
    }

    #[test]
    fn test_generate_all_flavours() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path().to_path_buf());

        let written = generate(&config, &Printer::new()).unwrap();
        assert_eq!(written.len(), 4);

        for flavour in DEFAULT_FLAVOURS {
            let path = dir.path().join(flavour).join(COLORS_TXT);
            assert!(written.contains(&path));

            let content = fs::read_to_string(&path).unwrap();
            let lines: Vec<&str> = content.lines().collect();
            assert_eq!(lines.len(), 48, "{}", flavour);
            for line in &lines {
                assert!(is_colour_line(line), "{}: bad line {:?}", flavour, line);
            }
        }
    }

    #[test]
    fn test_generate_is_idempotent() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path().to_path_buf());

        generate(&config, &Printer::new()).unwrap();
        let first: Vec<Vec<u8>> = DEFAULT_FLAVOURS
            .iter()
            .map(|f| fs::read(dir.path().join(f).join(COLORS_TXT)).unwrap())
            .collect();

        generate(&config, &Printer::new()).unwrap();
        let second: Vec<Vec<u8>> = DEFAULT_FLAVOURS
            .iter()
            .map(|f| fs::read(dir.path().join(f).join(COLORS_TXT)).unwrap())
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_mocha_black() {
        let dir = tempdir().unwrap();
        let config = Config {
            flavours: vec!["mocha".to_string()],
            ..config_in(dir.path().to_path_buf())
        };

        generate(&config, &Printer::new()).unwrap();

        let content = fs::read_to_string(dir.path().join("mocha").join(COLORS_TXT)).unwrap();
        assert!(content.starts_with("[BLACK_R:30]\n[BLACK_G:30]\n[BLACK_B:46]\n"));
        assert!(!dir.path().join("latte").exists());
    }

    #[test]
    fn test_generate_unknown_flavour_writes_nothing() {
        let dir = tempdir().unwrap();
        let config = Config {
            flavours: vec!["mocha".to_string(), "espresso".to_string()],
            ..config_in(dir.path().to_path_buf())
        };

        let err = generate(&config, &Printer::new()).unwrap_err();
        assert!(matches!(err, CtpError::UnknownTheme { .. }));
        assert!(!dir.path().join("mocha").exists());
    }

    #[test]
    fn test_generate_incomplete_theme() {
        let dir = tempdir().unwrap();
        let themes = dir.path().join("themes.yaml");
        fs::write(&themes, "dusk:\n  base: \"#101020\"\n").unwrap();

        let config = Config {
            flavours: vec!["dusk".to_string()],
            themes: Some(themes),
            ..config_in(dir.path().join("out"))
        };

        let err = generate(&config, &Printer::new()).unwrap_err();
        assert!(matches!(err, CtpError::MissingColour { .. }));
    }

    #[test]
    fn test_generate_rejects_bad_factor() {
        let dir = tempdir().unwrap();
        let config = Config {
            factor: 0.0,
            ..config_in(dir.path().to_path_buf())
        };

        assert!(matches!(
            generate(&config, &Printer::new()),
            Err(CtpError::Config { .. })
        ));
    }

    #[test]
    fn test_run_with_flags() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("ctp-df.yaml");
        fs::write(&config_path, "flavours: [latte]\nfactor: 1.2\n").unwrap();

        let args = BuildArgs {
            output: Some(dir.path().join("out")),
            flavours: vec!["frappe".to_string()],
            config: ConfigArgs {
                config: Some(config_path),
                ..Default::default()
            },
        };

        let config = args.resolve_config().unwrap();
        assert_eq!(config.flavours, vec!["frappe"]);
        assert_eq!(config.factor, 1.2);

        run(args, &Printer::new()).unwrap();
        assert!(dir.path().join("out").join("frappe").join(COLORS_TXT).exists());
        assert!(!dir.path().join("out").join("latte").exists());
    }
}
