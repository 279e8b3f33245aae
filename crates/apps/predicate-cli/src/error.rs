//! CLI error types.

use predicate_extract::ExtractError;
use thiserror::Error;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error enum wrapping all crate errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extractor could not be built from the configuration.
    #[error("{0}")]
    Extract(#[from] ExtractError),

    /// IO error.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// User-facing error with actionable message.
    #[error("{0}")]
    User(String),

    /// Not a device code.
    #[error("Invalid device code: {0}")]
    InvalidCode(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A background extraction task failed.
    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl CliError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a user-facing error.
    pub fn user(msg: impl Into<String>) -> Self {
        Self::User(msg.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors: 1
            Self::User(_) | Self::InvalidCode(_) => 1,
            // Not found: 2
            Self::FileNotFound(_) => 2,
            // Config errors: 3
            Self::Config(_) | Self::Toml(_) | Self::Extract(_) => 3,
            // IO errors: 9
            Self::Io(_) | Self::Task(_) => 9,
            // JSON/format errors: 10
            Self::Json(_) => 10,
        }
    }

    /// Recovery hint shown below the error, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidCode(_) => {
                Some("Device codes are 'K' followed by six digits, e.g. K231101.")
            }
            Self::FileNotFound(_) => Some("Check the path; extraction reads decoded text files."),
            Self::Extract(ExtractError::InvalidTrigger { .. }) => {
                Some("Trigger phrases are regular expressions; escape literal parentheses as \\(.")
            }
            Self::Config(_) | Self::Toml(_) | Self::Extract(_) => {
                Some("Run 'predigraph config' to see the effective configuration.")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::user("x").exit_code(), 1);
        assert_eq!(CliError::InvalidCode("x".into()).exit_code(), 1);
        assert_eq!(CliError::FileNotFound("x".into()).exit_code(), 2);
        assert_eq!(CliError::config("x").exit_code(), 3);
        assert_eq!(
            CliError::Extract(ExtractError::EmptyTriggerList("direct")).exit_code(),
            3
        );
    }

    #[test]
    fn test_hints() {
        assert!(CliError::InvalidCode("x".into()).hint().is_some());
        assert!(CliError::user("x").hint().is_none());
    }

    #[test]
    fn test_toml_error_converts() {
        let err: CliError = toml::from_str::<toml::Value>("not = [valid")
            .unwrap_err()
            .into();
        assert_eq!(err.exit_code(), 3);
    }
}
