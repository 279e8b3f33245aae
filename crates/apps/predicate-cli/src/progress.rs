//! Progress bar utilities for CLI commands.

use indicatif::{ProgressBar, ProgressStyle};

use crate::output::OutputFormat;

/// Create a hidden progress bar (no-op).
///
/// Use this when running in non-interactive mode or JSON output.
pub fn hidden() -> ProgressBar {
    ProgressBar::hidden()
}

/// Create a progress bar for known-length operations.
///
/// Shows progress as a percentage bar with ETA.
pub fn progress_bar(total: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Progress bar for a batch of documents.
///
/// Only shown for human output with more than one document, so JSON stays
/// clean and single-file runs stay quiet.
pub fn for_batch(total: usize, format: OutputFormat, enabled: bool) -> ProgressBar {
    if enabled && format == OutputFormat::Human && total > 1 {
        progress_bar(total as u64, "Extracting")
    } else {
        hidden()
    }
}
