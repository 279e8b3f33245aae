//! Output formatting for CLI.

use colored::Colorize;
use predicate_extract::{DeviceCode, ExtractionReport, RegionMatch};
use serde::Serialize;

use crate::config::CliConfig;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use 'human' or 'json'.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Trait for renderable output.
pub trait Render {
    /// Render as human-readable string.
    fn render_human(&self) -> String;

    /// Render as JSON string.
    fn render_json(&self) -> String;

    /// Render in the specified format.
    fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Human => self.render_human(),
            OutputFormat::Json => self.render_json(),
        }
    }
}

// =============================================================================
// Output Types
// =============================================================================

/// Predicates extracted from one file.
#[derive(Debug, Serialize)]
pub struct DocumentOutput {
    /// Input path as given.
    pub file: String,
    /// Citing device, explicit or inferred from the file name.
    pub device: Option<DeviceCode>,
    /// Predicates in first-seen order.
    pub predicates: Vec<DeviceCode>,
    /// Number of predicates.
    pub count: usize,
    /// Whether the file could not be read as text.
    pub unparseable: bool,
    /// Whether the device's own code was found and dropped.
    pub self_reference_removed: bool,
    /// Candidate regions, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<RegionMatch>>,
}

impl DocumentOutput {
    /// Build from an extraction report.
    pub fn from_report(file: String, report: ExtractionReport, with_regions: bool) -> Self {
        let predicates = report.result.into_codes();
        Self {
            file,
            device: report.own_code,
            count: predicates.len(),
            predicates,
            unparseable: report.unparseable,
            self_reference_removed: report.self_reference_removed,
            regions: with_regions.then_some(report.regions),
        }
    }

    fn render_human_lines(&self, lines: &mut Vec<String>) {
        let device = self
            .device
            .as_ref()
            .map(|d| format!(" ({})", d))
            .unwrap_or_default();

        if self.unparseable {
            lines.push(format!(
                "{}{}: {}",
                self.file.bold(),
                device,
                "unparseable".yellow()
            ));
            return;
        }

        let noun = if self.count == 1 {
            "predicate"
        } else {
            "predicates"
        };
        lines.push(format!(
            "{}{}: {} {}",
            self.file.bold(),
            device,
            self.count.to_string().green(),
            noun
        ));
        for code in &self.predicates {
            lines.push(format!("  {}", code));
        }

        if let Some(regions) = &self.regions {
            lines.push(format!("  {}", "Regions:".dimmed()));
            for region in regions {
                lines.push(format!("    {}", format_region(region)));
            }
        }
    }
}

/// One-line description of a scanned region, with 1-based inclusive lines.
pub fn format_region(m: &RegionMatch) -> String {
    let r = &m.region;
    let mut line = format!("[{}] lines {}-{}", r.source, r.start + 1, r.end);
    if !m.spillover.is_empty() {
        let extra: Vec<String> = m.spillover.iter().map(|l| (l + 1).to_string()).collect();
        line.push_str(&format!(" +{}", extra.join(",")));
    }
    if m.codes.is_empty() {
        line.push_str(": -");
    } else {
        let codes: Vec<&str> = m.codes.iter().map(DeviceCode::as_str).collect();
        line.push_str(&format!(": {}", codes.join(", ")));
    }
    line
}

/// Output for extract command.
#[derive(Debug, Serialize)]
pub struct ExtractOutput {
    /// Per-file results in argument order.
    pub documents: Vec<DocumentOutput>,
    /// Total predicates across all files.
    pub total_predicates: usize,
    /// Number of unparseable files.
    pub unparseable: usize,
}

impl ExtractOutput {
    /// Summarize per-file results.
    pub fn new(documents: Vec<DocumentOutput>) -> Self {
        Self {
            total_predicates: documents.iter().map(|d| d.count).sum(),
            unparseable: documents.iter().filter(|d| d.unparseable).count(),
            documents,
        }
    }
}

impl Render for ExtractOutput {
    fn render_human(&self) -> String {
        let mut lines = Vec::new();
        for doc in &self.documents {
            doc.render_human_lines(&mut lines);
        }
        if self.documents.len() > 1 {
            lines.push(String::new());
            let mut summary = format!(
                "{} {} files, {} predicates",
                "Processed".bold(),
                self.documents.len(),
                self.total_predicates
            );
            if self.unparseable > 0 {
                summary.push_str(&format!(", {} unparseable", self.unparseable));
            }
            lines.push(summary);
        }
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// One normalized input.
#[derive(Debug, Serialize)]
pub struct NormalizeEntry {
    /// Raw input.
    pub input: String,
    /// Canonical code, or `None` when invalid.
    pub code: Option<DeviceCode>,
}

/// Output for normalize command.
#[derive(Debug, Serialize)]
pub struct NormalizeOutput {
    /// Entries in input order.
    pub entries: Vec<NormalizeEntry>,
    /// Number of valid inputs.
    pub valid: usize,
    /// Number of invalid inputs.
    pub invalid: usize,
}

impl Render for NormalizeOutput {
    fn render_human(&self) -> String {
        let mut lines: Vec<String> = self
            .entries
            .iter()
            .map(|e| match &e.code {
                Some(code) => format!("{} -> {}", e.input, code.to_string().green()),
                None => format!("{} -> {}", e.input, "invalid".red()),
            })
            .collect();
        lines.push(format!(
            "{} {} valid, {} invalid",
            "Total:".bold(),
            self.valid,
            self.invalid
        ));
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for url command.
#[derive(Debug, Serialize)]
pub struct UrlOutput {
    pub code: DeviceCode,
    pub directory: String,
    pub url: String,
}

impl Render for UrlOutput {
    fn render_human(&self) -> String {
        self.url.clone()
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for config command.
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    /// Config file path.
    pub path: String,
    /// Whether the file was written.
    pub written: bool,
    /// Effective configuration.
    pub config: CliConfig,
    #[serde(skip)]
    pub toml: String,
}

impl Render for ConfigOutput {
    fn render_human(&self) -> String {
        let header = if self.written {
            format!("{} {}", "Configuration saved to:".green(), self.path)
        } else {
            format!("{} {}", "# Configuration file:".dimmed(), self.path)
        };
        format!("{}\n\n{}", header, self.toml.trim_end())
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
