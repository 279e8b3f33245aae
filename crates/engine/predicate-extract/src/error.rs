//! Error types for the extraction engine.
//!
//! Extraction itself never fails. These errors can only surface while an
//! extractor is being built from configuration.

use thiserror::Error;

/// Result type for building extractors.
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// Errors raised while compiling an extraction configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// A trigger phrase is not a valid regular expression.
    #[error("invalid trigger phrase {phrase:?} in {list} list: {source}")]
    InvalidTrigger {
        /// Name of the phrase list.
        list: &'static str,
        /// The offending phrase.
        phrase: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A trigger phrase list has no entries.
    #[error("{0} trigger list is empty")]
    EmptyTriggerList(&'static str),

    /// A forward window would not cover the trigger line.
    #[error("{0} window must cover at least one line")]
    InvalidWindow(&'static str),
}

impl ExtractError {
    /// Returns true if the error was caused by a phrase list.
    pub fn is_trigger_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidTrigger { .. } | Self::EmptyTriggerList(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ExtractError::EmptyTriggerList("table").to_string(),
            "table trigger list is empty"
        );
        assert_eq!(
            ExtractError::InvalidWindow("section").to_string(),
            "section window must cover at least one line"
        );
    }

    #[test]
    fn test_is_trigger_error() {
        assert!(ExtractError::EmptyTriggerList("direct").is_trigger_error());
        assert!(!ExtractError::InvalidWindow("direct").is_trigger_error());
    }
}
