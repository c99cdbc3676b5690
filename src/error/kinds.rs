use std::{fmt, io};

/// Crate-wide `Result` type using [`TabpickError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, TabpickError>;

/// Top-level error type for tabpick operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum TabpickError {
    /// Completion request errors (environment parsing).
    Request(RequestError),

    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors.
    Io(io::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Completion-request-specific errors.
///
/// These cover every way the environment handed over by the shell can be
/// unusable. On the completion path they are recovered into an empty
/// suggestion list rather than surfaced; see
/// [`CompletionEngine::complete_from_env`](crate::completion::CompletionEngine::complete_from_env).
#[derive(Debug)]
pub enum RequestError {
    /// A required environment variable is not set.
    MissingVariable(String),

    /// The cursor-word index is not a valid non-negative decimal.
    InvalidIndex(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    ReadFailed { path: String, reason: String },

    /// Invalid config format.
    InvalidFormat(String),

    /// Shell name not recognized by the script generator.
    UnsupportedShell(String),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for TabpickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabpickError::Request(e) => write!(f, "Completion request error: {e}"),
            TabpickError::Config(e) => write!(f, "Configuration error: {e}"),
            TabpickError::Io(e) => write!(f, "I/O error: {e}"),
            TabpickError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::MissingVariable(name) => {
                write!(f, "Environment variable not set: {name}")
            }
            RequestError::InvalidIndex(value) => {
                write!(f, "Invalid completion index: {value}")
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ReadFailed { path, reason } => {
                write!(f, "Failed to read config file {path}: {reason}")
            }
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::UnsupportedShell(shell) => {
                write!(
                    f,
                    "Unsupported shell: {shell}. Supported shells: bash, zsh, fish"
                )
            }
        }
    }
}

impl std::error::Error for TabpickError {}
impl std::error::Error for RequestError {}
impl std::error::Error for ConfigError {}

/* ========================= Conversions to TabpickError ========================= */

impl From<io::Error> for TabpickError {
    fn from(err: io::Error) -> Self {
        TabpickError::Io(err)
    }
}

impl From<RequestError> for TabpickError {
    fn from(err: RequestError) -> Self {
        TabpickError::Request(err)
    }
}

impl From<ConfigError> for TabpickError {
    fn from(err: ConfigError) -> Self {
        TabpickError::Config(err)
    }
}

impl From<String> for TabpickError {
    fn from(msg: String) -> Self {
        TabpickError::Generic(msg)
    }
}

impl From<&str> for TabpickError {
    fn from(msg: &str) -> Self {
        TabpickError::Generic(msg.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_display() {
        let err = RequestError::MissingVariable("COMP_WORDS".to_string());
        assert_eq!(err.to_string(), "Environment variable not set: COMP_WORDS");

        let err = RequestError::InvalidIndex("abc".to_string());
        assert_eq!(err.to_string(), "Invalid completion index: abc");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::UnsupportedShell("tcsh".to_string());
        assert!(err.to_string().contains("tcsh"));
        assert!(err.to_string().contains("bash, zsh, fish"));
    }

    #[test]
    fn test_top_level_wrapping() {
        let err: TabpickError = RequestError::MissingVariable("COMP_CWORD".to_string()).into();
        assert!(matches!(err, TabpickError::Request(_)));
        assert!(err.to_string().starts_with("Completion request error:"));

        let err: TabpickError = ConfigError::InvalidFormat("bad toml".to_string()).into();
        assert!(matches!(err, TabpickError::Config(_)));
    }

    #[test]
    fn test_from_string() {
        let err: TabpickError = "something went wrong".into();
        assert_eq!(err.to_string(), "something went wrong");
    }
}
