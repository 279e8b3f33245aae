//! Constants for device codes and extraction windows.
//!
//! The window sizes are the baseline calibration of the extraction engine.
//! They are tuned against observed summary layouts and can be overridden
//! through the extractor configuration.

// =============================================================================
// Device Codes
// =============================================================================

/// Prefix letter of a premarket notification number.
pub const CODE_PREFIX: char = 'K';

/// Number of digits following the prefix in canonical form.
pub const CODE_DIGITS: usize = 6;

/// Total length of a canonical code (prefix + digits).
pub const CODE_LENGTH: usize = 1 + CODE_DIGITS;

// =============================================================================
// Summary Documents
// =============================================================================

/// Base URL of the public decision-summary documents.
pub const SUMMARY_BASE_URL: &str = "https://www.accessdata.fda.gov/cdrh_docs";

/// First two-digit year served from a per-year directory (`pdf2/`).
pub const SUMMARY_FIRST_YEAR_DIR: u32 = 2;

/// First two-digit year of the 1900s numbering (served from `pdf/`).
pub const SUMMARY_LEGACY_CENTURY_START: u32 = 76;

// =============================================================================
// Extraction Windows (in lines)
// =============================================================================

/// Lines scanned after a direct predicate-assertion line.
pub const DEFAULT_DIRECT_WINDOW_AFTER: usize = 3;

/// Lines scanned before a table header line.
pub const DEFAULT_TABLE_WINDOW_BEFORE: usize = 2;

/// Table regions end this many lines below the header (exclusive).
pub const DEFAULT_TABLE_WINDOW_AFTER: usize = 20;

/// Lines scanned from a secondary section trigger, including the trigger line.
pub const DEFAULT_SECTION_WINDOW: usize = 15;
