//! Summary URL command.

use predicate_extract::DeviceCode;

use crate::error::{CliError, CliResult};
use crate::output::{OutputFormat, Render, UrlOutput};

/// Execute the url command.
pub fn url(format: OutputFormat, code: &str) -> CliResult<String> {
    let code = DeviceCode::normalize(code).ok_or_else(|| CliError::InvalidCode(code.to_string()))?;

    let output = UrlOutput {
        directory: code.summary_directory(),
        url: code.summary_url(),
        code,
    };

    Ok(output.render(format))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_recent_code() {
        let out = url(OutputFormat::Human, "K231101").unwrap();
        assert_eq!(
            out,
            "https://www.accessdata.fda.gov/cdrh_docs/pdf23/K231101.pdf"
        );
    }

    #[test]
    fn test_url_legacy_code_from_raw_form() {
        let out = url(OutputFormat::Json, "864052.000").unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["code"], "K864052");
        assert_eq!(json["directory"], "pdf");
    }

    #[test]
    fn test_url_invalid_code() {
        let err = url(OutputFormat::Human, "P123456").unwrap_err();
        assert!(matches!(err, CliError::InvalidCode(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
