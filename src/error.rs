use miette::Diagnostic;
use thiserror::Error;

/// Main error type for chop operations
#[derive(Error, Diagnostic, Debug)]
pub enum ChopError {
    #[error("IO error: {0}")]
    #[diagnostic(code(chop::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(chop::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(chop::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Image error with {path}: {message}")]
    #[diagnostic(code(chop::image))]
    Image {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Layout error: {message}")]
    #[diagnostic(code(chop::layout))]
    Layout {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, ChopError>;
