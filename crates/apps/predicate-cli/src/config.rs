//! CLI configuration.

use predicate_extract::ExtractionConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "PREDIGRAPH_DATA_DIR";

/// CLI configuration loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Trigger phrases and window sizes.
    pub extraction: ExtractionConfig,
    /// Display configuration.
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Load configuration from a file.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config
            .extraction
            .validate()
            .map_err(|e| CliError::config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Load configuration from the default location.
    pub fn load_default() -> CliResult<Self> {
        let path = default_config_path();
        Self::load(&path)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to pretty TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::config(format!("Failed to serialize config: {}", e)))
    }

    /// Output format to use when `--format` is not given.
    pub fn default_format(&self) -> OutputFormat {
        self.display.default_format.parse().unwrap_or_default()
    }
}

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Default output format.
    pub default_format: String,
    /// Whether to show a progress bar when extracting from several files.
    pub progress: bool,
    /// Whether to list candidate regions without `--report`.
    pub show_regions: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_format: "human".to_string(),
            progress: true,
            show_regions: false,
        }
    }
}

/// Get the default base directory for predigraph data.
///
/// Priority:
/// 1. `PREDIGRAPH_DATA_DIR` environment variable (if set)
/// 2. Platform-specific data directory (e.g., `~/.local/share/predigraph` on Linux)
/// 3. Fallback to `~/.predigraph`
pub fn default_base_dir() -> PathBuf {
    resolve_base_dir(std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
}

fn resolve_base_dir(override_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir;
    }

    directories::ProjectDirs::from("io", "predigraph", "predigraph")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| {
            std::env::var("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(".predigraph")
        })
}

/// Get the default config file path.
pub fn default_config_path() -> PathBuf {
    default_base_dir().join("config.toml")
}
