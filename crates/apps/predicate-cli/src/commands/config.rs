//! Config command.

use std::path::Path;

use tracing::info;

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{ConfigOutput, OutputFormat, Render};

/// Execute the config command.
///
/// Prints the effective configuration; with `write`, also saves it to `path`
/// so it can be edited.
pub fn config(config: CliConfig, format: OutputFormat, path: &Path, write: bool) -> CliResult<String> {
    if write {
        config.save(path)?;
        info!(path = %path.display(), "configuration written");
    }

    let output = ConfigOutput {
        path: path.display().to_string(),
        written: write,
        toml: config.to_toml()?,
        config,
    };

    Ok(output.render(format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_show_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let out = config(CliConfig::default(), OutputFormat::Human, &path, false).unwrap();
        assert!(out.contains("[extraction.windows]"));
        assert!(!path.exists());
    }

    #[test]
    fn test_config_write_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut cfg = CliConfig::default();
        cfg.display.show_regions = true;
        let out = config(cfg.clone(), OutputFormat::Json, &path, true).unwrap();

        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["written"], true);
        assert_eq!(CliConfig::load(&path).unwrap(), cfg);
    }
}
