//! Forward context windows around trigger phrases.
//!
//! In free-text summaries the cited code nearly always follows the sentence
//! that introduces it, so windows only extend downwards from the trigger.

use predicate_types::{CandidateRegion, RegionSource};

use crate::triggers::TriggerSet;

/// One window per line that contains a direct predicate-assertion phrase.
///
/// Each window covers the trigger line and the `after` lines following it,
/// clipped to the document. A line contributes at most one window no matter
/// how many phrases it contains.
pub fn select_trigger_windows<S: AsRef<str>>(
    lines: &[S],
    triggers: &TriggerSet,
    after: usize,
) -> Vec<CandidateRegion> {
    forward_windows(
        lines,
        triggers,
        after.saturating_add(1),
        RegionSource::DirectTrigger,
    )
}

/// One window per line that contains a secondary section phrase.
///
/// Each window covers `span` lines starting at the trigger line.
pub fn select_section_windows<S: AsRef<str>>(
    lines: &[S],
    triggers: &TriggerSet,
    span: usize,
) -> Vec<CandidateRegion> {
    forward_windows(lines, triggers, span, RegionSource::SectionTrigger)
}

fn forward_windows<S: AsRef<str>>(
    lines: &[S],
    triggers: &TriggerSet,
    span: usize,
    source: RegionSource,
) -> Vec<CandidateRegion> {
    triggers
        .matching_lines(lines)
        .map(|i| CandidateRegion::forward(i, span, lines.len(), source))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_DIRECT_TRIGGERS, DEFAULT_SECTION_TRIGGERS};

    fn direct() -> TriggerSet {
        TriggerSet::compile("direct", DEFAULT_DIRECT_TRIGGERS).unwrap()
    }

    #[test]
    fn test_window_covers_three_following_lines() {
        let lines = [
            "Summary",
            "The predicate device is listed below.",
            "a",
            "b",
            "c",
            "d",
        ];
        let windows = select_trigger_windows(&lines, &direct(), 3);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].range(), 1..5);
        assert_eq!(windows[0].source, RegionSource::DirectTrigger);
    }

    #[test]
    fn test_window_clipped_at_end() {
        let lines = ["x", "Reference device: K123456"];
        let windows = select_trigger_windows(&lines, &direct(), 3);
        assert_eq!(windows[0].range(), 1..2);
    }

    #[test]
    fn test_one_window_per_line() {
        // Matches several direct phrases at once
        let lines = ["Primary predicate device and reference device"];
        let windows = select_trigger_windows(&lines, &direct(), 3);
        assert_eq!(windows.len(), 1);
    }

    #[test]
    fn test_overlapping_windows_are_kept() {
        let lines = ["predicate device", "predicate device", "x"];
        let windows = select_trigger_windows(&lines, &direct(), 3);
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].range(), 0..3);
        assert_eq!(windows[1].range(), 1..3);
    }

    #[test]
    fn test_no_triggers() {
        let lines = ["Indications for use", "K123456"];
        assert!(select_trigger_windows(&lines, &direct(), 3).is_empty());
    }

    #[test]
    fn test_section_windows() {
        let section = TriggerSet::compile("section", DEFAULT_SECTION_TRIGGERS).unwrap();
        let mut lines = vec!["Predicate identification".to_string()];
        lines.extend((0..20).map(|i| format!("line {i}")));

        let windows = select_section_windows(&lines, &section, 15);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].range(), 0..15);
        assert_eq!(windows[0].source, RegionSource::SectionTrigger);
    }
}
