//! Predicate device reference extraction.
//!
//! Given the decoded text of a decision summary and the code of the device
//! it describes, this crate finds every other device code the summary cites
//! as a predicate. It tolerates OCR noise (`O` for `0`, codes split across
//! wrapped lines) and the common layouts: free-text sentences, comparison
//! tables, and continuation lines below table rows.
//!
//! # Pipeline
//!
//! ```text
//! text ─► lines ─┬─► trigger windows  ─┐
//!                ├─► table regions    ─┼─► code matcher ─► union ─► drop own code
//!                └─► section windows  ─┘
//! ```
//!
//! - [`matcher`] - Code pattern matching with OCR correction
//! - [`triggers`] - Compiled trigger phrase lists
//! - [`windows`] - Forward windows around trigger phrases
//! - [`tables`] - Table regions and the spillover rule
//! - [`extractor`] - The orchestrator and the [`ReferenceExtractor`] trait
//! - [`config`] - Phrase lists and window sizes
//!
//! The engine performs no I/O and keeps no state between calls. Fetching,
//! decoding and persisting documents belong to the caller.
//!
//! # Example
//!
//! ```
//! use predicate_extract::{PredicateExtractor, ReferenceExtractor};
//! use predicate_types::ExtractedText;
//!
//! let extractor = PredicateExtractor::default();
//! let text = ExtractedText::parsed(
//!     "Device: K231101\nThe predicate device is K1O1234.\n",
//! );
//!
//! let result = extractor.extract(&text, Some("K231101"));
//! assert_eq!(result.to_strings(), vec!["K101234"]);
//! ```

pub mod config;
pub mod error;
pub mod extractor;
pub mod matcher;
pub mod tables;
pub mod triggers;
pub mod windows;

pub use config::{ExtractionConfig, WindowConfig};
pub use error::{ExtractError, ExtractResult};
pub use extractor::{
    extract_predicates, ExtractionReport, PredicateExtractor, ReferenceExtractor, RegionMatch,
};
pub use matcher::{contains_code_token, find_candidates, find_codes, CodeCandidate, MatchClass};
pub use tables::{select_table_regions, TableRegion};
pub use triggers::TriggerSet;
pub use windows::{select_section_windows, select_trigger_windows};

// Re-export the types callers need alongside the engine
pub use predicate_types::{
    normalize, CandidateRegion, DeviceCode, DocumentText, ExtractedText, ExtractionResult,
    PredicateRelationship, RegionSource,
};
