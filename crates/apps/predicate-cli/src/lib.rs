//! Command-line interface for predicate reference extraction.
//!
//! This crate provides the `predigraph` binary. It includes commands for:
//!
//! - **Extraction**: Find the predicate devices cited by decision summaries
//! - **Codes**: Normalize raw device codes and locate summary documents
//! - **Configuration**: Inspect or write the trigger phrases and windows
//!
//! # Quick Start
//!
//! ```bash
//! # Extract predicates; the own code is taken from the file name
//! predigraph extract K231101.txt
//!
//! # Show every candidate region that was scanned
//! predigraph extract K231101.txt --report
//!
//! # Normalize raw codes
//! predigraph normalize K864052.000 864052
//!
//! # Summary document location
//! predigraph url K231101
//! ```
//!
//! # Output Formats
//!
//! All commands support `--format` for output control:
//!
//! - `human` (default): Human-readable with colors
//! - `json`: Machine-readable JSON
//!
//! # Configuration
//!
//! Configuration is loaded from `config.toml` in the platform data directory
//! (or `$PREDIGRAPH_DATA_DIR`). Override with `--config`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod progress;

// Re-export main types
pub use cli::{Cli, Commands, CompletionShell, OutputFormatArg};
pub use config::CliConfig;
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Render};
