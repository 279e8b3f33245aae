//! Document text as handed over by the text-extraction collaborator.
//!
//! The engine never reads binary documents itself. Whatever layer decodes a
//! summary document supplies either the decoded text or an explicit marker
//! that decoding failed.

use serde::{Deserialize, Serialize};

/// Immutable line sequence of a decoded document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentText {
    lines: Vec<String>,
}

impl DocumentText {
    /// Split raw text into lines. Both `\n` and `\r\n` endings are accepted.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Build a document from pre-split lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// All lines, in document order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// True when there is no non-whitespace content at all.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }

    /// Join the half-open line range `[start, end)` with newlines.
    ///
    /// The range is clipped to the document bounds.
    pub fn join(&self, start: usize, end: usize) -> String {
        let end = end.min(self.lines.len());
        let start = start.min(end);
        self.lines[start..end].join("\n")
    }
}

impl From<&str> for DocumentText {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

/// Outcome of upstream text extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum ExtractedText {
    /// Text was decoded successfully.
    Parsed {
        /// The decoded document.
        document: DocumentText,
    },
    /// The source could not be decoded.
    Unparseable {
        /// Human-readable reason from the collaborator.
        reason: String,
    },
}

impl ExtractedText {
    /// Wrap successfully decoded text.
    pub fn parsed(text: &str) -> Self {
        Self::Parsed {
            document: DocumentText::from_text(text),
        }
    }

    /// Mark the source as not decodable.
    pub fn unparseable(reason: impl Into<String>) -> Self {
        Self::Unparseable {
            reason: reason.into(),
        }
    }

    /// Convert an optional text, treating `None` as unparseable.
    pub fn from_option(text: Option<&str>) -> Self {
        match text {
            Some(text) => Self::parsed(text),
            None => Self::unparseable("no text supplied"),
        }
    }

    /// The document, if decoding succeeded.
    pub fn document(&self) -> Option<&DocumentText> {
        match self {
            Self::Parsed { document } => Some(document),
            Self::Unparseable { .. } => None,
        }
    }

    /// Check if the collaborator flagged the source as unparseable.
    pub fn is_unparseable(&self) -> bool {
        matches!(self, Self::Unparseable { .. })
    }
}

impl From<DocumentText> for ExtractedText {
    fn from(document: DocumentText) -> Self {
        Self::Parsed { document }
    }
}
