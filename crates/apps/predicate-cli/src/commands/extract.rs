//! Extract command.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::stream::{FuturesOrdered, StreamExt};
use predicate_extract::{DeviceCode, ExtractedText, PredicateExtractor};
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{DocumentOutput, ExtractOutput, OutputFormat, Render};
use crate::progress;

/// Execute the extract command.
///
/// Files are read and scanned on blocking tasks that share one extractor.
/// Results keep the order of `files`.
pub async fn extract(
    config: CliConfig,
    format: OutputFormat,
    files: &[PathBuf],
    own_code: Option<&str>,
    report: bool,
) -> CliResult<String> {
    let own_code = own_code
        .map(|raw| DeviceCode::normalize(raw).ok_or_else(|| CliError::InvalidCode(raw.to_string())))
        .transpose()?;

    if let Some(missing) = files.iter().find(|f| !f.is_file()) {
        return Err(CliError::FileNotFound(missing.display().to_string()));
    }

    let extractor = Arc::new(PredicateExtractor::with_config(config.extraction.clone())?);
    let with_regions = report || config.display.show_regions;
    let pb = progress::for_batch(files.len(), format, config.display.progress);

    let mut tasks: FuturesOrdered<_> = files
        .iter()
        .cloned()
        .map(|path| {
            let extractor = Arc::clone(&extractor);
            let own_code = own_code.clone();
            tokio::task::spawn_blocking(move || {
                extract_file(&extractor, &path, own_code, with_regions)
            })
        })
        .collect();

    let mut documents = Vec::with_capacity(files.len());
    while let Some(joined) = tasks.next().await {
        documents.push(joined??);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let output = ExtractOutput::new(documents);
    Ok(output.render(format))
}

/// Read one file and extract its predicates.
fn extract_file(
    extractor: &PredicateExtractor,
    path: &Path,
    own_code: Option<DeviceCode>,
    with_regions: bool,
) -> CliResult<DocumentOutput> {
    let text = read_text(path)?;
    let own_code = own_code.or_else(|| infer_own_code(path));
    debug!(file = %path.display(), own_code = ?own_code, "extracting");

    let report = extractor.extract_with_report(&text, own_code.as_ref().map(DeviceCode::as_str));
    info!(
        file = %path.display(),
        predicates = report.result.len(),
        unparseable = report.unparseable,
        "document processed"
    );

    Ok(DocumentOutput::from_report(
        path.display().to_string(),
        report,
        with_regions,
    ))
}

/// Read a file as decoded text. Bytes that are not UTF-8 mark it unparseable.
fn read_text(path: &Path) -> CliResult<ExtractedText> {
    let bytes = std::fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => ExtractedText::parsed(&text),
        Err(e) => ExtractedText::unparseable(format!("not valid UTF-8: {}", e.utf8_error())),
    })
}

/// Device code taken from a file name such as `K231101.txt`.
fn infer_own_code(path: &Path) -> Option<DeviceCode> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(DeviceCode::normalize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use predicate_test_utils::{write_summaries, COMPARISON_TABLE, FREE_TEXT, SELF_REFERENCE};

    fn quiet_config() -> CliConfig {
        let mut config = CliConfig::default();
        config.display.progress = false;
        config
    }

    async fn run_json(files: &[PathBuf], own_code: Option<&str>, report: bool) -> serde_json::Value {
        let out = extract(quiet_config(), OutputFormat::Json, files, own_code, report)
            .await
            .unwrap();
        serde_json::from_str(&out).unwrap()
    }

    #[tokio::test]
    async fn test_extract_preserves_argument_order() {
        let (_dir, paths) = write_summaries(&[
            ("table.txt", COMPARISON_TABLE.text.as_bytes()),
            ("free.txt", FREE_TEXT.text.as_bytes()),
        ]);

        let json = run_json(&paths, None, false).await;
        let docs = json["documents"].as_array().unwrap();
        assert_eq!(docs.len(), 2);
        assert!(docs[0]["file"].as_str().unwrap().ends_with("table.txt"));
        assert_eq!(docs[0]["predicates"], serde_json::json!(["K234567", "K345678"]));
        assert_eq!(docs[1]["predicates"], serde_json::json!(["K163547"]));
        assert_eq!(json["total_predicates"], 3);
    }

    #[tokio::test]
    async fn test_own_code_inferred_from_file_name() {
        let (_dir, paths) = write_summaries(&[("K555555.txt", SELF_REFERENCE.text.as_bytes())]);

        let json = run_json(&paths, None, false).await;
        let doc = &json["documents"][0];
        assert_eq!(doc["device"], "K555555");
        assert_eq!(doc["predicates"], serde_json::json!(["K444444"]));
        assert_eq!(doc["self_reference_removed"], true);
    }

    #[tokio::test]
    async fn test_explicit_own_code_wins() {
        let (_dir, paths) = write_summaries(&[("K444444.txt", SELF_REFERENCE.text.as_bytes())]);

        let json = run_json(&paths, Some("555555"), false).await;
        assert_eq!(
            json["documents"][0]["predicates"],
            serde_json::json!(["K444444"])
        );
    }

    #[tokio::test]
    async fn test_non_utf8_file_is_unparseable() {
        let (_dir, paths) = write_summaries(&[("scan.bin", &[0xffu8, 0xfe, 0x00, 0x4b][..])]);

        let json = run_json(&paths, None, false).await;
        assert_eq!(json["documents"][0]["unparseable"], true);
        assert_eq!(json["documents"][0]["count"], 0);
        assert_eq!(json["unparseable"], 1);
    }

    #[tokio::test]
    async fn test_report_includes_regions() {
        let (_dir, paths) = write_summaries(&[("K201010.txt", COMPARISON_TABLE.text.as_bytes())]);

        let json = run_json(&paths, None, true).await;
        let regions = json["documents"][0]["regions"].as_array().unwrap();
        assert!(regions.iter().any(|r| r["region"]["source"] == "table"));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = extract(
            quiet_config(),
            OutputFormat::Human,
            &[PathBuf::from("/nonexistent/summary.txt")],
            None,
            false,
        )
        .await;
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }

    #[tokio::test]
    async fn test_invalid_own_code() {
        let (_dir, paths) = write_summaries(&[("a.txt", FREE_TEXT.text.as_bytes())]);
        let result = extract(quiet_config(), OutputFormat::Human, &paths, Some("P1"), false).await;
        assert!(matches!(result, Err(CliError::InvalidCode(_))));
    }

    #[tokio::test]
    async fn test_invalid_extraction_config() {
        let (_dir, paths) = write_summaries(&[("a.txt", FREE_TEXT.text.as_bytes())]);
        let mut config = quiet_config();
        config.extraction.direct_triggers = vec!["(unclosed".to_string()];

        let result = extract(config, OutputFormat::Human, &paths, None, false).await;
        let err = result.unwrap_err();
        assert!(matches!(err, CliError::Extract(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_infer_own_code() {
        assert_eq!(
            infer_own_code(Path::new("/data/K231101.txt")).unwrap(),
            "K231101"
        );
        assert_eq!(infer_own_code(Path::new("k231101.000")).unwrap(), "K231101");
        assert!(infer_own_code(Path::new("summary.txt")).is_none());
    }
}
