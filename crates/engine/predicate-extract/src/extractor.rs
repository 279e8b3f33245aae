//! Predicate extraction orchestration.
//!
//! Three passes select candidate regions over the same line sequence:
//!
//! 1. direct predicate-assertion windows,
//! 2. table regions (with spillover lines),
//! 3. secondary section windows for summaries that never say "predicate".
//!
//! Each region is scanned for codes and the matches are unioned in pass
//! order, so the result lists codes by first discovery. The citing device's
//! own code is removed last.

use std::sync::LazyLock;

use predicate_types::{
    CandidateRegion, DeviceCode, DocumentText, ExtractedText, ExtractionResult,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ExtractionConfig;
use crate::error::ExtractResult;
use crate::matcher::find_codes;
use crate::tables::select_table_regions;
use crate::triggers::TriggerSet;
use crate::windows::{select_section_windows, select_trigger_windows};

/// Trait for extracting referenced device codes from document text.
///
/// Implementations must be pure: the same input always yields the same,
/// identically ordered output, and nothing is retained between calls.
pub trait ReferenceExtractor: Send + Sync {
    /// Extract referenced codes, excluding `own_code` when given.
    ///
    /// Never fails. Unparseable or empty text yields an empty result.
    fn extract(&self, text: &ExtractedText, own_code: Option<&str>) -> ExtractionResult;
}

/// Codes found in one candidate region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionMatch {
    /// The scanned region.
    pub region: CandidateRegion,
    /// Continuation lines scanned in addition to the region (tables only).
    pub spillover: Vec<usize>,
    /// Codes found in the region, before self-reference removal.
    pub codes: Vec<DeviceCode>,
}

/// Extraction result together with the regions that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    /// Final codes.
    pub result: ExtractionResult,
    /// Every selected region, in pass order.
    pub regions: Vec<RegionMatch>,
    /// Normalized own code, when one was supplied and valid.
    pub own_code: Option<DeviceCode>,
    /// Whether the own code was found and removed.
    pub self_reference_removed: bool,
    /// Whether the collaborator flagged the text as unparseable.
    pub unparseable: bool,
}

/// The standard rule-based predicate extractor.
///
/// Compiling the trigger lists is the only fallible step; once built, the
/// extractor is immutable and can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct PredicateExtractor {
    config: ExtractionConfig,
    direct: TriggerSet,
    table: TriggerSet,
    section: TriggerSet,
}

impl PredicateExtractor {
    /// Build an extractor from a configuration.
    pub fn with_config(config: ExtractionConfig) -> ExtractResult<Self> {
        config.validate()?;
        let direct = TriggerSet::compile("direct", &config.direct_triggers)?;
        let table = TriggerSet::compile("table", &config.table_triggers)?;
        let section = TriggerSet::compile("section", &config.section_triggers)?;
        Ok(Self {
            config,
            direct,
            table,
            section,
        })
    }

    /// The configuration this extractor was built from.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract from plain text.
    pub fn extract_text(&self, text: &str, own_code: Option<&str>) -> ExtractionResult {
        self.extract_document(&DocumentText::from_text(text), own_code)
    }

    /// Extract from an already split document.
    pub fn extract_document(&self, doc: &DocumentText, own_code: Option<&str>) -> ExtractionResult {
        self.report_document(doc, own_code).result
    }

    /// Extract and keep the per-region diagnostics.
    pub fn extract_with_report(
        &self,
        text: &ExtractedText,
        own_code: Option<&str>,
    ) -> ExtractionReport {
        match text {
            ExtractedText::Parsed { document } => self.report_document(document, own_code),
            ExtractedText::Unparseable { reason } => {
                warn!(reason = %reason, "document text unparseable, no predicates extracted");
                ExtractionReport {
                    own_code: own_code.and_then(DeviceCode::normalize),
                    unparseable: true,
                    ..Default::default()
                }
            }
        }
    }

    /// Select every candidate region without scanning it.
    pub fn select_regions(&self, doc: &DocumentText) -> Vec<(CandidateRegion, Vec<usize>)> {
        let lines = doc.lines();
        let windows = &self.config.windows;

        let direct = select_trigger_windows(lines, &self.direct, windows.direct_after)
            .into_iter()
            .map(|region| (region, Vec::new()));
        let tables = select_table_regions(
            lines,
            &self.table,
            windows.table_before,
            windows.table_after,
        )
        .into_iter()
        .map(|t| (t.region, t.spillover));
        let sections = select_section_windows(lines, &self.section, windows.section_span)
            .into_iter()
            .map(|region| (region, Vec::new()));

        direct.chain(tables).chain(sections).collect()
    }

    fn report_document(&self, doc: &DocumentText, own_code: Option<&str>) -> ExtractionReport {
        let own = own_code.and_then(|raw| {
            let code = DeviceCode::normalize(raw);
            if code.is_none() {
                debug!(own_code = raw, "own code is not a valid device code, keeping all matches");
            }
            code
        });

        if doc.is_blank() {
            debug!("empty document, no predicates extracted");
            return ExtractionReport {
                own_code: own,
                ..Default::default()
            };
        }

        let mut result = ExtractionResult::new();
        let mut regions = Vec::new();

        for (region, spillover) in self.select_regions(doc) {
            let mut found = find_codes(&doc.join(region.start, region.end));
            for &line in &spillover {
                found.extend(find_codes(&doc.lines()[line]));
            }

            debug!(
                source = %region.source,
                start = region.start,
                end = region.end,
                codes = found.len(),
                "scanned candidate region"
            );

            result.extend(found.iter().cloned());
            regions.push(RegionMatch {
                region,
                spillover,
                codes: found.into_codes(),
            });
        }

        let self_reference_removed = own.as_ref().is_some_and(|code| result.remove(code));

        debug!(
            regions = regions.len(),
            codes = result.len(),
            self_reference_removed,
            "predicate extraction complete"
        );

        ExtractionReport {
            result,
            regions,
            own_code: own,
            self_reference_removed,
            unparseable: false,
        }
    }
}

impl Default for PredicateExtractor {
    fn default() -> Self {
        Self::with_config(ExtractionConfig::default())
            .expect("default extraction configuration compiles")
    }
}

impl ReferenceExtractor for PredicateExtractor {
    fn extract(&self, text: &ExtractedText, own_code: Option<&str>) -> ExtractionResult {
        self.extract_with_report(text, own_code).result
    }
}

static DEFAULT_EXTRACTOR: LazyLock<PredicateExtractor> = LazyLock::new(PredicateExtractor::default);

/// Extract predicate references from text with the default configuration.
///
/// `None` text is treated as unparseable and yields an empty result.
pub fn extract_predicates(text: Option<&str>, own_code: Option<&str>) -> ExtractionResult {
    DEFAULT_EXTRACTOR.extract(&ExtractedText::from_option(text), own_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WindowConfig;
    use predicate_types::RegionSource;

    fn strings(result: &ExtractionResult) -> Vec<String> {
        result.to_strings()
    }

    #[test]
    fn test_extractor_is_object_safe() {
        fn _takes_extractor(_: &dyn ReferenceExtractor) {}
    }

    #[test]
    fn test_extractor_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PredicateExtractor>();
    }

    #[test]
    fn test_direct_trigger() {
        let extractor = PredicateExtractor::default();
        let text = "Summary\nThe predicate device is K123456.\nAdditional notes.\n";
        let result = extractor.extract_text(text, Some("K999999"));
        assert_eq!(strings(&result), vec!["K123456"]);
    }

    #[test]
    fn test_code_outside_every_region_is_ignored() {
        let extractor = PredicateExtractor::default();
        let mut lines = vec!["The predicate device is described below.".to_string()];
        // Past the table window opened by the same line
        lines.extend((0..25).map(|_| "filler".to_string()));
        lines.push("Unrelated registration K777777".to_string());

        let result = extractor.extract_text(&lines.join("\n"), None);
        assert!(result.is_empty());
    }

    #[test]
    fn test_direct_window_size_is_configurable() {
        let text = "predicate device:\nline\nline\nK123456";
        let narrow = PredicateExtractor::with_config(
            ExtractionConfig::default()
                .with_table_triggers(["^never$"])
                .with_section_triggers(["^never$"])
                .with_windows(WindowConfig::default().with_direct_after(1)),
        )
        .unwrap();
        assert!(narrow.extract_text(text, None).is_empty());

        let default = PredicateExtractor::default();
        assert_eq!(strings(&default.extract_text(text, None)), vec!["K123456"]);
    }

    #[test]
    fn test_self_reference_removed() {
        let extractor = PredicateExtractor::default();
        let text = "This 510(k) K555555 claims substantial equivalence.\n\
                    The predicate device is K444444.\n\
                    Submitter of K555555: Acme.";
        let report =
            extractor.extract_with_report(&ExtractedText::parsed(text), Some("k555555.000"));
        assert_eq!(strings(&report.result), vec!["K444444"]);
        assert!(report.self_reference_removed);
        assert_eq!(report.own_code.unwrap(), "K555555");
    }

    #[test]
    fn test_invalid_own_code_keeps_matches() {
        let extractor = PredicateExtractor::default();
        let result = extractor.extract_text("predicate device K123456", Some("garbage"));
        assert_eq!(strings(&result), vec!["K123456"]);
    }

    #[test]
    fn test_unparseable_text() {
        let extractor = PredicateExtractor::default();
        let report =
            extractor.extract_with_report(&ExtractedText::unparseable("encrypted"), Some("K1"));
        assert!(report.unparseable);
        assert!(report.result.is_empty());
        assert!(report.regions.is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_predicates(Some(""), Some("K123456")).is_empty());
        assert!(extract_predicates(None, Some("K123456")).is_empty());
        assert!(extract_predicates(Some("\n\n  \n"), None).is_empty());
    }

    #[test]
    fn test_report_lists_regions_in_pass_order() {
        let extractor = PredicateExtractor::default();
        let text = "Comparable device: K111111\n510(k) Number\nK222222";
        let report = extractor.extract_with_report(&ExtractedText::parsed(text), None);

        let sources: Vec<RegionSource> = report.regions.iter().map(|r| r.region.source).collect();
        let first_table = sources.iter().position(|s| *s == RegionSource::Table).unwrap();
        let first_section = sources
            .iter()
            .position(|s| *s == RegionSource::SectionTrigger)
            .unwrap();
        assert_eq!(sources[0], RegionSource::DirectTrigger);
        assert!(first_table < first_section);
        assert_eq!(strings(&report.result), vec!["K111111", "K222222"]);
    }

    #[test]
    fn test_section_pass_reaches_further() {
        let extractor = PredicateExtractor::default();
        let mut lines = vec!["Predicate identification".to_string()];
        lines.extend((0..8).map(|_| "filler".to_string()));
        lines.push("K246810".to_string());

        let result = extractor.extract_text(&lines.join("\n"), None);
        assert_eq!(strings(&result), vec!["K246810"]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExtractionConfig::default().with_direct_triggers(["[bad"]);
        let err = PredicateExtractor::with_config(config).unwrap_err();
        assert!(err.is_trigger_error());
    }

    #[test]
    fn test_select_regions_without_scanning() {
        let extractor = PredicateExtractor::default();
        let doc = DocumentText::from_text("nothing here\nreference device");
        let regions = extractor.select_regions(&doc);
        assert!(regions
            .iter()
            .any(|(r, _)| r.source == RegionSource::DirectTrigger && r.start == 1));
    }
}
