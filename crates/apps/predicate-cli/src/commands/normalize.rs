//! Normalize command.

use predicate_extract::normalize as normalize_code;

use crate::error::CliResult;
use crate::output::{NormalizeEntry, NormalizeOutput, OutputFormat, Render};

/// Execute the normalize command.
///
/// Invalid inputs are reported, not treated as errors.
pub fn normalize(format: OutputFormat, codes: &[String]) -> CliResult<String> {
    let entries: Vec<NormalizeEntry> = codes
        .iter()
        .map(|raw| NormalizeEntry {
            input: raw.clone(),
            code: normalize_code(raw),
        })
        .collect();

    let valid = entries.iter().filter(|e| e.code.is_some()).count();
    let output = NormalizeOutput {
        invalid: entries.len() - valid,
        valid,
        entries,
    };

    Ok(output.render(format))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_counts() {
        let out = normalize(
            OutputFormat::Json,
            &args(&["K864052.000", "864052", "k123456", "K12", ""]),
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["valid"], 3);
        assert_eq!(json["invalid"], 2);
        assert_eq!(json["entries"][0]["code"], "K864052");
        assert_eq!(json["entries"][1]["code"], "K864052");
        assert_eq!(json["entries"][2]["code"], "K123456");
        assert!(json["entries"][3]["code"].is_null());
    }

    #[test]
    fn test_normalize_human() {
        let out = normalize(OutputFormat::Human, &args(&["K231101"])).unwrap();
        assert!(out.contains("1 valid, 0 invalid"));
    }
}
