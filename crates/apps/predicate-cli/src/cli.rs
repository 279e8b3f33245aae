//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Predigraph CLI.
#[derive(Parser, Debug)]
#[command(name = "predigraph")]
#[command(author = "Predigraph Contributors")]
#[command(version)]
#[command(about = "Extract predicate device references from 510(k) decision summaries")]
#[command(
    long_about = "Predigraph finds the predicate devices a 510(k) decision summary cites.\n\nRun 'predigraph extract K231101.txt' on the decoded text of a summary to get started."
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "PREDIGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human or json). Defaults to the configured format.
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormatArg>,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormatArg {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // =========================================================================
    // Extraction Commands
    // =========================================================================
    /// Extract predicate references from decoded summary text.
    ///
    /// Each file holds the text of one decision summary. Files are processed
    /// concurrently; results are printed in argument order.
    Extract {
        /// Text files to scan.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Code of the citing device, excluded from the results.
        ///
        /// When omitted, each file's name (e.g. K231101.txt) is used if it
        /// is a valid device code.
        #[arg(long)]
        own_code: Option<String>,

        /// Include every candidate region and the codes it yielded.
        #[arg(long)]
        report: bool,
    },

    // =========================================================================
    // Code Commands
    // =========================================================================
    /// Normalize raw device codes into canonical form.
    ///
    /// Accepts forms such as K864052.000, 864052 or k864052.
    Normalize {
        /// Raw codes.
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// Show the public summary document URL for a device code.
    Url {
        /// Device code (raw forms are normalized first).
        code: String,
    },

    // =========================================================================
    // Configuration Commands
    // =========================================================================
    /// Show the effective configuration as TOML.
    Config {
        /// Write the effective configuration to the config path.
        #[arg(long)]
        write: bool,
    },

    /// Generate shell completions.
    ///
    /// Outputs shell completion scripts for various shells.
    Completions {
        /// Shell to generate completions for.
        shell: CompletionShell,
    },
}

/// Shell types for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompletionShell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// PowerShell.
    PowerShell,
}
