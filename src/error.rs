use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Failed to build placeholder pattern. Original error: {0}")]
    RegexError(#[from] regex::Error),

    /// A template or field configuration implies a special field that the
    /// entry does not back with data. Never recovered locally.
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Invalid date '{value}': {reason}.")]
    InvalidDate { value: String, reason: String },

    #[error("Unrecognized entry: {0}.")]
    UnknownEntryType(String),

    #[error("No input file found at '{path}'. Supported extensions: {extensions}.")]
    ConfigNotFound { path: String, extensions: String },

    #[error("Configuration error: {0}.")]
    ConfigValidation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with this crate's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Shorthand for raising an invariant violation.
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal(message.into())
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
