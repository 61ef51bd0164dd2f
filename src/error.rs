use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pixl operations
#[derive(Error, Diagnostic, Debug)]
pub enum PixlError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pixl::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pixl::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Missing input: {message}")]
    #[diagnostic(code(pixl::missing_input))]
    MissingInput { message: String },

    #[error("Invalid parameter: {message}")]
    #[diagnostic(code(pixl::invalid_parameter))]
    InvalidParameter {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PixlError>;
