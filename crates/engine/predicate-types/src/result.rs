//! Extraction results and predicate relationships.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::code::DeviceCode;

/// Insertion-ordered set of referenced device codes.
///
/// Codes keep the order in which they were first discovered. Inserting a
/// code that is already present is a no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<DeviceCode>", into = "Vec<DeviceCode>")]
pub struct ExtractionResult {
    codes: Vec<DeviceCode>,
    seen: HashSet<DeviceCode>,
}

impl ExtractionResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a code. Returns `true` if it was not already present.
    pub fn insert(&mut self, code: DeviceCode) -> bool {
        if self.seen.contains(&code) {
            return false;
        }
        self.seen.insert(code.clone());
        self.codes.push(code);
        true
    }

    /// Insert every code from an iterator, keeping first-seen order.
    pub fn extend<I: IntoIterator<Item = DeviceCode>>(&mut self, codes: I) {
        for code in codes {
            self.insert(code);
        }
    }

    /// Remove a code. Returns `true` if it was present.
    pub fn remove(&mut self, code: &DeviceCode) -> bool {
        if !self.seen.remove(code) {
            return false;
        }
        self.codes.retain(|c| c != code);
        true
    }

    /// Check if a code is present.
    pub fn contains(&self, code: &DeviceCode) -> bool {
        self.seen.contains(code)
    }

    /// Codes in first-seen order.
    pub fn codes(&self) -> &[DeviceCode] {
        &self.codes
    }

    /// Iterate over codes in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, DeviceCode> {
        self.codes.iter()
    }

    /// Number of codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if no codes were found.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Canonical strings in first-seen order.
    pub fn to_strings(&self) -> Vec<String> {
        self.codes.iter().map(|c| c.to_string()).collect()
    }

    /// Consume the result, returning the ordered codes.
    pub fn into_codes(self) -> Vec<DeviceCode> {
        self.codes
    }
}

impl PartialEq for ExtractionResult {
    fn eq(&self, other: &Self) -> bool {
        self.codes == other.codes
    }
}

impl Eq for ExtractionResult {}

impl From<Vec<DeviceCode>> for ExtractionResult {
    fn from(codes: Vec<DeviceCode>) -> Self {
        let mut result = Self::new();
        result.extend(codes);
        result
    }
}

impl From<ExtractionResult> for Vec<DeviceCode> {
    fn from(result: ExtractionResult) -> Self {
        result.codes
    }
}

impl FromIterator<DeviceCode> for ExtractionResult {
    fn from_iter<I: IntoIterator<Item = DeviceCode>>(iter: I) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl<'a> IntoIterator for &'a ExtractionResult {
    type Item = &'a DeviceCode;
    type IntoIter = std::slice::Iter<'a, DeviceCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

impl IntoIterator for ExtractionResult {
    type Item = DeviceCode;
    type IntoIter = std::vec::IntoIter<DeviceCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.into_iter()
    }
}

/// A device together with the predicates its summary cites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateRelationship {
    /// The citing device.
    pub device: DeviceCode,
    /// Cited predicate devices, in first-seen order.
    pub predicates: Vec<DeviceCode>,
    /// Number of predicates.
    pub count: usize,
}

impl PredicateRelationship {
    /// Build a relationship record from an extraction result.
    pub fn new(device: DeviceCode, result: &ExtractionResult) -> Self {
        let predicates = result.codes().to_vec();
        Self {
            device,
            count: predicates.len(),
            predicates,
        }
    }

    /// Check whether the device cites any predicate.
    pub fn has_predicates(&self) -> bool {
        self.count > 0
    }
}
