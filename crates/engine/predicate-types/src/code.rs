//! Device code type and normalization.
//!
//! A device code (premarket notification number) is stored in canonical
//! form: the uppercase prefix letter followed by exactly six ASCII digits,
//! e.g. `K231101`. Equality, ordering and hashing all operate on the
//! canonical string, so `k231101.000` and `K231101` are the same code once
//! normalized.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    CODE_DIGITS, CODE_LENGTH, CODE_PREFIX, SUMMARY_BASE_URL, SUMMARY_FIRST_YEAR_DIR,
    SUMMARY_LEGACY_CENTURY_START,
};
use crate::error::{Result, TypeError};

/// A canonical device code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeviceCode(String);

impl DeviceCode {
    /// Normalize a raw code into canonical form.
    ///
    /// - Everything from the first `.` onward is discarded (`K864052.000`).
    /// - A missing prefix letter is prepended (`864052` becomes `K864052`).
    /// - The prefix letter is uppercased.
    ///
    /// Returns `None` when the input is empty or the remainder is not six
    /// ASCII digits. Callers treat `None` as "no code", not as a failure.
    pub fn normalize(raw: &str) -> Option<Self> {
        Self::try_normalize(raw).ok()
    }

    /// Like [`DeviceCode::normalize`], but reports why the input was rejected.
    pub fn try_normalize(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let base = match trimmed.find('.') {
            Some(idx) => &trimmed[..idx],
            None => trimmed,
        };
        if base.is_empty() {
            return Err(TypeError::EmptyCode);
        }

        let digits = match base.chars().next() {
            Some(first) if first.eq_ignore_ascii_case(&CODE_PREFIX) => &base[first.len_utf8()..],
            _ => base,
        };

        if digits.len() == CODE_DIGITS && digits.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(format!("{}{}", CODE_PREFIX, digits)))
        } else {
            Err(TypeError::invalid_code(raw))
        }
    }

    /// Accept a string only if it is already in canonical form.
    pub fn from_canonical(s: &str) -> Option<Self> {
        Self::is_canonical(s).then(|| Self(s.to_string()))
    }

    /// Check whether a string is exactly `K` followed by six digits.
    pub fn is_canonical(s: &str) -> bool {
        let mut chars = s.chars();
        s.len() == CODE_LENGTH
            && chars.next() == Some(CODE_PREFIX)
            && chars.all(|c| c.is_ascii_digit())
    }

    /// The canonical string, e.g. `"K231101"`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The six digits after the prefix.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }

    /// Two-digit year encoded in the first two digits.
    pub fn year_part(&self) -> u32 {
        // Canonical form guarantees two leading ASCII digits.
        self.digits()[..2].parse().unwrap_or_default()
    }

    /// Directory under which the public summary document is filed.
    ///
    /// Codes from 2002 through 2075 live in per-year directories (`pdf2`,
    /// `pdf15`, ...). Everything older, including the 1976-1999 numbering,
    /// lives in the shared `pdf` directory.
    pub fn summary_directory(&self) -> String {
        let year = self.year_part();
        if year < SUMMARY_FIRST_YEAR_DIR || year >= SUMMARY_LEGACY_CENTURY_START {
            "pdf".to_string()
        } else {
            format!("pdf{}", year)
        }
    }

    /// URL of the public decision-summary document for this code.
    ///
    /// This only derives the location; nothing is fetched.
    pub fn summary_url(&self) -> String {
        format!(
            "{}/{}/{}.pdf",
            SUMMARY_BASE_URL,
            self.summary_directory(),
            self.0
        )
    }
}

impl fmt::Display for DeviceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DeviceCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for DeviceCode {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_normalize(s)
    }
}

impl TryFrom<String> for DeviceCode {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self> {
        Self::try_normalize(&value)
    }
}

impl From<DeviceCode> for String {
    fn from(code: DeviceCode) -> Self {
        code.0
    }
}

impl PartialEq<str> for DeviceCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DeviceCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Normalize a raw code string. See [`DeviceCode::normalize`].
pub fn normalize(raw: &str) -> Option<DeviceCode> {
    DeviceCode::normalize(raw)
}
