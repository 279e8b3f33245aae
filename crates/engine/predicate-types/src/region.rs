//! Candidate line regions selected for code scanning.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Which heuristic selected a region.
///
/// Provenance is carried for diagnostics only; extraction results never
/// depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum RegionSource {
    /// A direct predicate-assertion phrase.
    DirectTrigger,
    /// A table or column header phrase.
    Table,
    /// A secondary "comparable/equivalent device" section phrase.
    SectionTrigger,
}

impl std::fmt::Display for RegionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectTrigger => write!(f, "trigger"),
            Self::Table => write!(f, "table"),
            Self::SectionTrigger => write!(f, "section"),
        }
    }
}

/// A half-open range of line indices `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateRegion {
    /// First line of the region.
    pub start: usize,
    /// One past the last line of the region.
    pub end: usize,
    /// Line whose phrase match produced this region.
    pub anchor: usize,
    /// Heuristic that selected the region.
    pub source: RegionSource,
}

impl CandidateRegion {
    /// Region `[anchor - before, anchor + after)`, clipped to `[0, line_count)`.
    ///
    /// `after` counts the anchor line itself, so `after = 20` covers the
    /// anchor and the nineteen lines below it.
    pub fn around(
        anchor: usize,
        before: usize,
        after: usize,
        line_count: usize,
        source: RegionSource,
    ) -> Self {
        let end = anchor.saturating_add(after).min(line_count);
        Self {
            start: anchor.saturating_sub(before).min(end),
            end,
            anchor,
            source,
        }
    }

    /// Region of `len` lines starting at `anchor`, clipped to `line_count`.
    pub fn forward(anchor: usize, len: usize, line_count: usize, source: RegionSource) -> Self {
        let end = anchor.saturating_add(len).min(line_count);
        Self {
            start: anchor.min(end),
            end,
            anchor,
            source,
        }
    }

    /// Number of lines covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True if the region covers no lines.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check whether a line index falls inside the region.
    pub fn contains(&self, line: usize) -> bool {
        (self.start..self.end).contains(&line)
    }

    /// The covered line indices.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
