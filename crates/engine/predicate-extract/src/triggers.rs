//! Compiled trigger phrase lists.

use regex::{Regex, RegexBuilder};

use crate::error::{ExtractError, ExtractResult};

/// An ordered list of case-insensitive phrase patterns.
#[derive(Debug, Clone)]
pub struct TriggerSet {
    name: &'static str,
    patterns: Vec<Regex>,
}

impl TriggerSet {
    /// Compile a phrase list. `name` identifies the list in errors and logs.
    pub fn compile<S: AsRef<str>>(name: &'static str, phrases: &[S]) -> ExtractResult<Self> {
        if phrases.is_empty() {
            return Err(ExtractError::EmptyTriggerList(name));
        }

        let patterns = phrases
            .iter()
            .map(|phrase| {
                let phrase = phrase.as_ref();
                RegexBuilder::new(phrase)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| ExtractError::InvalidTrigger {
                        list: name,
                        phrase: phrase.to_string(),
                        source,
                    })
            })
            .collect::<ExtractResult<Vec<_>>>()?;

        Ok(Self { name, patterns })
    }

    /// Name of the list.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of phrases.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True if the list has no phrases.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Index of the first phrase (in list order) found in `line`.
    pub fn first_match(&self, line: &str) -> Option<usize> {
        self.patterns.iter().position(|p| p.is_match(line))
    }

    /// Check whether any phrase occurs in `line`.
    pub fn is_match(&self, line: &str) -> bool {
        self.first_match(line).is_some()
    }

    /// Indices of the lines containing at least one phrase.
    pub fn matching_lines<'a, S: AsRef<str>>(
        &'a self,
        lines: &'a [S],
    ) -> impl Iterator<Item = usize> + 'a {
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| self.is_match(line.as_ref()))
            .map(|(i, _)| i)
    }

    /// The source text of phrase `index`.
    pub fn phrase(&self, index: usize) -> Option<&str> {
        self.patterns.get(index).map(Regex::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        let set = TriggerSet::compile("direct", &[r"predicate\s+device"]).unwrap();
        assert!(set.is_match("PREDICATE   DEVICE"));
        assert!(set.is_match("the Predicate device is"));
        assert!(!set.is_match("predicate-device"));
    }

    #[test]
    fn test_first_match_respects_list_order() {
        let set = TriggerSet::compile("direct", &["device", "predicate"]).unwrap();
        assert_eq!(set.first_match("predicate device"), Some(0));
        assert_eq!(set.first_match("predicate only"), Some(1));
        assert_eq!(set.first_match("nothing"), None);
        assert_eq!(set.phrase(1), Some("predicate"));
    }

    #[test]
    fn test_matching_lines() {
        let set = TriggerSet::compile("table", &[r"510\(k\)\s*number"]).unwrap();
        let lines = ["intro", "510(k) Number | Device", "K234567", "510(K) number"];
        let found: Vec<usize> = set.matching_lines(&lines).collect();
        assert_eq!(found, vec![1, 3]);
    }

    #[test]
    fn test_invalid_phrase() {
        let err = TriggerSet::compile("section", &["(unclosed"]).unwrap_err();
        match err {
            ExtractError::InvalidTrigger { list, phrase, .. } => {
                assert_eq!(list, "section");
                assert_eq!(phrase, "(unclosed");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_list() {
        let phrases: [&str; 0] = [];
        assert!(matches!(
            TriggerSet::compile("direct", &phrases),
            Err(ExtractError::EmptyTriggerList("direct"))
        ));
    }
}
