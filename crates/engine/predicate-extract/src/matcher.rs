//! Device code pattern matching.
//!
//! Two independent scans run over the same text:
//!
//! - The strict scan accepts the prefix followed by digits, either as one
//!   run (`K123456`) or split by whitespace after the third digit
//!   (`K123 456`, typical of justified or wrapped text).
//! - The OCR scan additionally accepts the letter `O` among the digits.
//!   Scanned summaries regularly render `0` as `O` (`K1O1234`).
//!
//! Only OCR matches that already have the exact code shape get their `O`s
//! replaced, which keeps ordinary words from being read as codes. Every
//! cleaned candidate is validated against the canonical format; anything
//! else is dropped.

use std::sync::LazyLock;

use predicate_types::{DeviceCode, ExtractionResult, CODE_LENGTH, CODE_PREFIX};
use regex::Regex;
use tracing::trace;

static STRICT_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bK\s*[0-9]{6,}\b|\bK\s*[0-9]{3}\s*[0-9]{3,}\b")
        .expect("strict code pattern is valid")
});

static OCR_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bK\s*[O0-9]{6,}\b").expect("OCR code pattern is valid"));

static CODE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)K[0-9]{6}").expect("code token pattern is valid"));

/// Which scan produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchClass {
    /// Prefix plus digits only.
    Strict,
    /// Prefix plus digits or the letter `O`.
    OcrTolerant,
}

/// A raw code-shaped substring before cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeCandidate<'a> {
    /// Matched text, possibly with internal whitespace.
    pub raw: &'a str,
    /// Byte offset of the match in the scanned text.
    pub offset: usize,
    /// Scan that produced the match.
    pub class: MatchClass,
}

impl CodeCandidate<'_> {
    /// Clean the candidate and validate it.
    ///
    /// Returns `None` when the result is not a canonical code.
    pub fn resolve(&self) -> Option<DeviceCode> {
        let mut cleaned: String = self
            .raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        if self.class == MatchClass::OcrTolerant && is_ocr_shaped(&cleaned) {
            cleaned = format!("{}{}", CODE_PREFIX, cleaned[1..].replace('O', "0"));
        }

        let code = DeviceCode::from_canonical(&cleaned);
        if code.is_none() {
            trace!(raw = self.raw, cleaned = %cleaned, "discarding non-canonical candidate");
        }
        code
    }
}

/// `K` followed by exactly six characters from `[O0-9]`.
fn is_ocr_shaped(cleaned: &str) -> bool {
    let mut chars = cleaned.chars();
    cleaned.len() == CODE_LENGTH
        && chars.next() == Some(CODE_PREFIX)
        && chars.all(|c| c == 'O' || c.is_ascii_digit())
}

/// Every raw candidate in `text`: strict matches first, then OCR matches.
pub fn find_candidates(text: &str) -> Vec<CodeCandidate<'_>> {
    let strict = STRICT_CODE.find_iter(text).map(|m| CodeCandidate {
        raw: m.as_str(),
        offset: m.start(),
        class: MatchClass::Strict,
    });
    let ocr = OCR_CODE.find_iter(text).map(|m| CodeCandidate {
        raw: m.as_str(),
        offset: m.start(),
        class: MatchClass::OcrTolerant,
    });
    strict.chain(ocr).collect()
}

/// Find every device code in `text`, de-duplicated in first-seen order.
pub fn find_codes(text: &str) -> ExtractionResult {
    find_candidates(text)
        .iter()
        .filter_map(CodeCandidate::resolve)
        .collect()
}

/// Check whether a line carries a plain code-shaped token (`K` + six digits).
///
/// This is the cheap row test used by the table spillover rule. It ignores
/// word boundaries and OCR substitutions.
pub fn contains_code_token(line: &str) -> bool {
    CODE_TOKEN.is_match(line)
}
