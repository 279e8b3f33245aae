//! Configuration for the extraction engine.
//!
//! Trigger phrases and window sizes are an empirical calibration, not part
//! of the algorithm. They live here so they can be retuned (for example from
//! a `[extraction]` TOML section) without touching the matching code.
//!
//! Every phrase is a case-insensitive regular expression matched anywhere in
//! a line.

use predicate_types::{
    DEFAULT_DIRECT_WINDOW_AFTER, DEFAULT_SECTION_WINDOW, DEFAULT_TABLE_WINDOW_AFTER,
    DEFAULT_TABLE_WINDOW_BEFORE,
};
use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, ExtractResult};

/// Phrases that directly assert a predicate relationship.
pub const DEFAULT_DIRECT_TRIGGERS: &[&str] = &[
    r"predicate\s+device",
    r"primary\s+predicate\s+device",
    r"reference\s+predicate\s+device",
    r"substantially\s+equivalent\s+device",
    r"equivalent\s+legally\s+marketed\s+device",
    r"reference\s+device",
    r"comparable\s+device",
    r"previously\s+cleared\s+device",
];

/// Column and header phrases that introduce a device comparison table.
pub const DEFAULT_TABLE_TRIGGERS: &[&str] = &[
    r"(predicate|reference|equivalent)\s*device",
    r"510\(k\)\s*number",
    r"k\s*number",
    r"substantial\s*equivalence",
    // Comparison tables usually carry a "Model" column next to the codes
    r"model",
];

/// Section phrases for summaries that avoid the word "predicate".
pub const DEFAULT_SECTION_TRIGGERS: &[&str] = &[
    r"comparable\s+device",
    r"equivalent\s+device",
    r"reference\s+device",
    r"predicate\s+identification",
    r"substantial\s+equivalence",
];

fn to_owned_list(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|s| s.to_string()).collect()
}

/// Full extraction configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Direct predicate-assertion phrases.
    pub direct_triggers: Vec<String>,
    /// Table and column header phrases.
    pub table_triggers: Vec<String>,
    /// Secondary section phrases.
    pub section_triggers: Vec<String>,
    /// Window sizes in lines.
    pub windows: WindowConfig,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            direct_triggers: to_owned_list(DEFAULT_DIRECT_TRIGGERS),
            table_triggers: to_owned_list(DEFAULT_TABLE_TRIGGERS),
            section_triggers: to_owned_list(DEFAULT_SECTION_TRIGGERS),
            windows: WindowConfig::default(),
        }
    }
}

impl ExtractionConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the direct trigger phrases.
    pub fn with_direct_triggers<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.direct_triggers = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the table header phrases.
    pub fn with_table_triggers<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table_triggers = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the secondary section phrases.
    pub fn with_section_triggers<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.section_triggers = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the window sizes.
    pub fn with_windows(mut self, windows: WindowConfig) -> Self {
        self.windows = windows;
        self
    }

    /// Check structural constraints.
    ///
    /// Phrase syntax is checked when the extractor compiles the lists.
    pub fn validate(&self) -> ExtractResult<()> {
        if self.direct_triggers.is_empty() {
            return Err(ExtractError::EmptyTriggerList("direct"));
        }
        if self.table_triggers.is_empty() {
            return Err(ExtractError::EmptyTriggerList("table"));
        }
        if self.section_triggers.is_empty() {
            return Err(ExtractError::EmptyTriggerList("section"));
        }
        self.windows.validate()
    }
}

/// Window sizes, in lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Lines following a direct trigger line that are scanned with it.
    pub direct_after: usize,
    /// Lines above a table header included in the table region.
    pub table_before: usize,
    /// Table regions end this many lines below the header (exclusive).
    pub table_after: usize,
    /// Lines scanned from a section trigger, including the trigger line.
    pub section_span: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            direct_after: DEFAULT_DIRECT_WINDOW_AFTER,
            table_before: DEFAULT_TABLE_WINDOW_BEFORE,
            table_after: DEFAULT_TABLE_WINDOW_AFTER,
            section_span: DEFAULT_SECTION_WINDOW,
        }
    }
}

impl WindowConfig {
    /// Set the direct trigger window.
    pub fn with_direct_after(mut self, lines: usize) -> Self {
        self.direct_after = lines;
        self
    }

    /// Set the table window bounds.
    pub fn with_table(mut self, before: usize, after: usize) -> Self {
        self.table_before = before;
        self.table_after = after;
        self
    }

    /// Set the section window.
    pub fn with_section_span(mut self, lines: usize) -> Self {
        self.section_span = lines;
        self
    }

    /// Both exclusive-end windows must at least cover their trigger line.
    pub fn validate(&self) -> ExtractResult<()> {
        if self.table_after == 0 {
            return Err(ExtractError::InvalidWindow("table"));
        }
        if self.section_span == 0 {
            return Err(ExtractError::InvalidWindow("section"));
        }
        Ok(())
    }
}
