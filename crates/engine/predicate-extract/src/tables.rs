//! Table region detection.
//!
//! Comparison tables list predicate devices under a header row such as
//! `510(k) Number | Device Name`. A header line opens a region reaching a
//! couple of lines above it (captions, wrapped headers) and well below it
//! to cover the table body.
//!
//! Cells wrap. When a row carries a code and the line right after it is a
//! non-blank continuation without one, that continuation is scanned as well,
//! even when it falls just outside the region.

use predicate_types::{CandidateRegion, RegionSource};

use crate::matcher::contains_code_token;
use crate::triggers::TriggerSet;

/// A table region plus the continuation lines picked up by the spillover rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRegion {
    /// Lines covered by the table.
    pub region: CandidateRegion,
    /// Continuation lines to scan individually, in document order.
    pub spillover: Vec<usize>,
}

/// One region per table header line.
///
/// Regions span `[header - before, header + after)`, clipped to the document.
/// Regions from neighbouring headers may overlap; they are not merged.
pub fn select_table_regions<S: AsRef<str>>(
    lines: &[S],
    triggers: &TriggerSet,
    before: usize,
    after: usize,
) -> Vec<TableRegion> {
    triggers
        .matching_lines(lines)
        .map(|header| {
            let region =
                CandidateRegion::around(header, before, after, lines.len(), RegionSource::Table);
            TableRegion {
                spillover: spillover_lines(lines, &region),
                region,
            }
        })
        .collect()
}

/// Continuation lines following code-bearing rows of `region`.
fn spillover_lines<S: AsRef<str>>(lines: &[S], region: &CandidateRegion) -> Vec<usize> {
    region
        .range()
        .filter(|&i| contains_code_token(lines[i].as_ref()))
        .map(|i| i + 1)
        .filter(|&next| {
            lines.get(next).is_some_and(|line| {
                let line = line.as_ref();
                !line.trim().is_empty() && !contains_code_token(line)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TABLE_TRIGGERS;

    fn table() -> TriggerSet {
        TriggerSet::compile("table", DEFAULT_TABLE_TRIGGERS).unwrap()
    }

    #[test]
    fn test_region_bounds() {
        let mut lines: Vec<String> = (0..40).map(|i| format!("row {i}")).collect();
        lines[10] = "510(k) Number | Device Name".to_string();

        let regions = select_table_regions(&lines, &table(), 2, 20);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].region.range(), 8..30);
        assert_eq!(regions[0].region.anchor, 10);
        assert_eq!(regions[0].region.source, RegionSource::Table);
    }

    #[test]
    fn test_region_clipped_at_start() {
        let lines = ["510(k) Number | Device Name", "K234567 | WidgetPro"];
        let regions = select_table_regions(&lines, &table(), 2, 20);
        assert_eq!(regions[0].region.range(), 0..2);
    }

    #[test]
    fn test_spillover_continuation_line() {
        let lines = [
            "510(k) Number | Device Name",
            "K234567 | WidgetPro",
            "   (continued description)",
            "K345678 | WidgetPro Max",
            "",
        ];
        let regions = select_table_regions(&lines, &table(), 2, 20);
        assert_eq!(regions[0].spillover, vec![2]);
    }

    #[test]
    fn test_spillover_skips_blank_and_code_lines() {
        let lines = [
            "510(k) Number",
            "K234567",
            "K345678",
            "   ",
            "trailing text",
        ];
        let regions = select_table_regions(&lines, &table(), 0, 20);
        assert!(regions[0].spillover.is_empty());
    }

    #[test]
    fn test_spillover_may_leave_region() {
        let lines = ["510(k) Number", "K234567", "note: see K 345678 for details"];
        let regions = select_table_regions(&lines, &table(), 0, 2);
        assert_eq!(regions[0].region.range(), 0..2);
        assert_eq!(regions[0].spillover, vec![2]);
    }

    #[test]
    fn test_spillover_at_document_end() {
        let lines = ["510(k) Number", "K234567"];
        let regions = select_table_regions(&lines, &table(), 0, 20);
        assert!(regions[0].spillover.is_empty());
    }

    #[test]
    fn test_multiple_headers_overlap() {
        // "Model" and "Predicate Device" both open regions
        let lines = ["Predicate Device", "Model", "K234567"];
        let regions = select_table_regions(&lines, &table(), 2, 20);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].region.range(), 0..3);
        assert_eq!(regions[1].region.range(), 0..3);
    }
}
