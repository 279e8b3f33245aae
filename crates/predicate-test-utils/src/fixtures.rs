//! Sample decision-summary texts.
//!
//! Each fixture mimics one layout seen in decoded summaries. Expected codes
//! are listed in first-seen order as the extractor reports them.

use predicate_types::DeviceCode;

/// A sample summary with its citing device and expected predicates.
#[derive(Debug, Clone, Copy)]
pub struct SummaryFixture {
    /// Short name used in assertion messages.
    pub name: &'static str,
    /// The citing device.
    pub own_code: &'static str,
    /// Decoded text.
    pub text: &'static str,
    /// Expected predicates in first-seen order.
    pub expected: &'static [&'static str],
}

impl SummaryFixture {
    /// Expected predicates as canonical codes.
    pub fn expected_codes(&self) -> Vec<DeviceCode> {
        self.expected
            .iter()
            .map(|s| DeviceCode::from_canonical(s).expect("fixture codes are canonical"))
            .collect()
    }
}

/// Free-text summary naming a single predicate in a sentence.
pub const FREE_TEXT: SummaryFixture = SummaryFixture {
    name: "free_text",
    own_code: "K231101",
    text: "\
510(k) Summary
Submitter: Acme Medical
Device trade name: FlowSense

The predicate device is the FlowMeter 2 (K163547), cleared in 2016.
Additional notes.
Both devices measure flow using ultrasound.
",
    expected: &["K163547"],
};

/// Comparison table with one predicate per row.
pub const COMPARISON_TABLE: SummaryFixture = SummaryFixture {
    name: "comparison_table",
    own_code: "K201010",
    text: "\
Technological Characteristics
510(k) Number | Device Name | Manufacturer
K234567 | WidgetPro | Widget Co
K345678 | WidgetPro Max | Widget Co
Intended use is identical.
",
    expected: &["K234567", "K345678"],
};

/// Scanned summary where OCR rendered zeros as the letter O.
pub const OCR_NOISE: SummaryFixture = SummaryFixture {
    name: "ocr_noise",
    own_code: "K191919",
    text: "\
SECTION 5 - 510(k) SUMMARY
Predicate device: K1O1234
Manufactured by Orion Devices
",
    expected: &["K101234"],
};

/// Summary that cites its own number alongside the predicate.
pub const SELF_REFERENCE: SummaryFixture = SummaryFixture {
    name: "self_reference",
    own_code: "K555555",
    text: "\
510(k) Number: K555555
The subject device K555555 is substantially equivalent to the
predicate device K444444.
",
    expected: &["K444444"],
};

/// Code wrapped across two lines by justified text.
pub const WRAPPED_CODE: SummaryFixture = SummaryFixture {
    name: "wrapped_code",
    own_code: "K210000",
    text: "\
Our device is substantially equivalent to the primary predicate device, K123
456, which was cleared for the same indications.
",
    expected: &["K123456"],
};

/// Summary that never uses the word "predicate".
pub const SECTION_ONLY: SummaryFixture = SummaryFixture {
    name: "section_only",
    own_code: "K220202",
    text: "\
Substantial Equivalence Discussion
The subject device was compared against the following.
Its intended use matches.
The technological characteristics are similar.
Performance testing supports the comparison.
Comparison devices:
    OrthoFix Plate System (K181818)
    OrthoFix Screw System (K191817)
",
    expected: &["K181818", "K191817"],
};

/// Table row whose description wraps onto a continuation line.
pub const TABLE_SPILLOVER: SummaryFixture = SummaryFixture {
    name: "table_spillover",
    own_code: "K240404",
    text: "\
510(k) Number    Trade Name
K170707          CardioTrack
                 (see also K 171717 for the lead set)
",
    expected: &["K170707", "K171717"],
};

/// Text without any trigger phrase or code.
pub const NO_PREDICATES: SummaryFixture = SummaryFixture {
    name: "no_predicates",
    own_code: "K250505",
    text: "\
Indications for Use
This device is intended for measuring blood pressure at home.
",
    expected: &[],
};

/// All fixtures.
pub const ALL_FIXTURES: &[SummaryFixture] = &[
    FREE_TEXT,
    COMPARISON_TABLE,
    OCR_NOISE,
    SELF_REFERENCE,
    WRAPPED_CODE,
    SECTION_ONLY,
    TABLE_SPILLOVER,
    NO_PREDICATES,
];
