//! Error types for device code parsing.

use thiserror::Error;

/// Result type for type-level conversions.
pub type Result<T> = std::result::Result<T, TypeError>;

/// Errors raised when a string cannot be turned into a canonical value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TypeError {
    /// Input was empty (or only a sub-revision suffix such as `.000`).
    #[error("device code is empty")]
    EmptyCode,

    /// Input does not normalize to a prefix letter followed by six digits.
    #[error("invalid device code: {0:?}")]
    InvalidCode(String),
}

impl TypeError {
    /// Create an invalid code error.
    pub fn invalid_code(raw: impl Into<String>) -> Self {
        Self::InvalidCode(raw.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(TypeError::EmptyCode.to_string(), "device code is empty");
        assert_eq!(
            TypeError::invalid_code("K12").to_string(),
            "invalid device code: \"K12\""
        );
    }
}
