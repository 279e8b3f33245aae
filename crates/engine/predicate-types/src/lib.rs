//! Data structures for predicate device reference extraction.
//!
//! This crate provides the value types shared by the extraction engine and
//! the applications built on it. It contains no matching logic, only type
//! definitions with normalization and serialization support.
//!
//! # Module Organization
//!
//! - [`code`] - Canonical device codes and normalization
//! - [`document`] - Decoded document text and the unparseable marker
//! - [`region`] - Candidate line regions and their provenance
//! - [`result`] - Ordered extraction results and relationship records
//! - [`constants`] - Code shape, summary locations, window defaults
//! - [`error`] - Parsing errors
//!
//! # Example
//!
//! ```
//! use predicate_types::{DeviceCode, ExtractionResult, PredicateRelationship};
//!
//! let device = DeviceCode::normalize("k231101.000").unwrap();
//! assert_eq!(device.as_str(), "K231101");
//!
//! let mut found = ExtractionResult::new();
//! found.insert(DeviceCode::normalize("K163547").unwrap());
//!
//! let rel = PredicateRelationship::new(device, &found);
//! assert_eq!(rel.count, 1);
//! ```

/// Crate version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod code;
pub mod constants;
pub mod document;
pub mod error;
pub mod region;
pub mod result;

pub use code::{normalize, DeviceCode};
pub use constants::*;
pub use document::{DocumentText, ExtractedText};
pub use error::{Result, TypeError};
pub use region::{CandidateRegion, RegionSource};
pub use result::{ExtractionResult, PredicateRelationship};
