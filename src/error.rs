use miette::Diagnostic;
use thiserror::Error;

/// Main error type for ctp-df operations
#[derive(Error, Diagnostic, Debug)]
pub enum CtpError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(ctp::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(ctp::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Theme '{theme}' has no colour named '{colour}'")]
    #[diagnostic(
        code(ctp::missing_colour),
        help("Every colour referenced by the scheme must be defined in each theme")
    )]
    MissingColour { theme: String, colour: String },

    #[error("Unknown theme: {name}")]
    #[diagnostic(code(ctp::unknown_theme))]
    UnknownTheme {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(ctp::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, CtpError>;
