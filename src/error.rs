use miette::Diagnostic;
use thiserror::Error;

/// Main error type for theming operations
#[derive(Error, Diagnostic, Debug)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    #[diagnostic(code(theming::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(theming::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(theming::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(theming::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Quantizer produced {found} usable colors, need {need}")]
    #[diagnostic(
        code(theming::palette),
        help("the image may be too uniform; try a source with more distinct colors")
    )]
    NotEnoughColors { found: usize, need: usize },

    #[error("`{command}` failed with exit status {status}")]
    #[diagnostic(code(theming::command))]
    CommandFailed { command: String, status: i32 },

    #[error("`{command}` terminated by signal {signal}")]
    #[diagnostic(code(theming::command))]
    CommandSignaled { command: String, signal: i32 },
}

pub type Result<T> = std::result::Result<T, ThemeError>;
