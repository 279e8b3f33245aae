//! Helper functions for building test documents.
//!
//! Provides convenience functions for generating device codes, synthetic
//! summaries of arbitrary length, and summary files on disk.

use std::path::PathBuf;

use predicate_types::{DeviceCode, DocumentText, ExtractedText};
use tempfile::TempDir;

/// Deterministic canonical code for an index (`K000000` + index, wrapping).
pub fn code_for(index: u32) -> DeviceCode {
    let code = format!("K{:06}", index % 1_000_000);
    DeviceCode::from_canonical(&code).expect("formatted code is canonical")
}

/// `count` lines of filler text that contain no trigger phrase and no code.
pub fn filler_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("Bench testing paragraph {i} describes tensile strength."))
        .collect()
}

/// Wrap lines into a parsed document.
pub fn parsed_lines<S: AsRef<str>>(lines: &[S]) -> ExtractedText {
    ExtractedText::from(DocumentText::from_lines(
        lines.iter().map(|l| l.as_ref().to_string()),
    ))
}

/// A synthetic summary of roughly `sections` pages.
///
/// Every section opens with a direct predicate sentence citing one code,
/// followed by filler. Codes are `code_for(1..=sections)`.
pub fn synthetic_summary(sections: u32, filler_per_section: usize) -> String {
    let mut lines = vec!["510(k) Summary".to_string()];
    for i in 1..=sections {
        lines.push(format!(
            "The predicate device is the Example System {i} ({}).",
            code_for(i)
        ));
        lines.extend(filler_lines(filler_per_section));
    }
    lines.join("\n")
}

/// Write summary files into a fresh temp directory.
///
/// Each entry is `(file name, contents)`. Returns the directory (which must
/// outlive the test) and the file paths in the same order.
pub fn write_summaries(files: &[(&str, &[u8])]) -> (TempDir, Vec<PathBuf>) {
    let dir = TempDir::new().expect("temp dir");
    let paths = files
        .iter()
        .map(|(name, contents)| {
            let path = dir.path().join(name);
            std::fs::write(&path, contents).expect("write summary file");
            path
        })
        .collect();
    (dir, paths)
}
