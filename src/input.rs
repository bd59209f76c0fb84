//! Loading lint reports and rules metadata from disk or stdin.

use crate::error::{Error, Result};
use crate::models::{LintResult, ReportInput, RulesMeta};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Parse report JSON. `origin` names the source in error messages.
pub fn parse_report(text: &str, origin: &str) -> Result<(Vec<LintResult>, Option<RulesMeta>)> {
    let input: ReportInput = serde_json::from_str(text).map_err(|source| Error::Report {
        origin: origin.to_string(),
        source,
    })?;
    Ok(input.into_parts())
}

/// Read a report from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_report(path: Option<&str>) -> Result<(Vec<LintResult>, Option<RulesMeta>)> {
    match path {
        None | Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(Error::Stdin)?;
            parse_report(&text, "<stdin>")
        }
        Some(p) => {
            let text = fs::read_to_string(p).map_err(|source| Error::Io {
                path: p.into(),
                source,
            })?;
            parse_report(&text, p)
        }
    }
}

/// Read a standalone rules metadata JSON object.
pub fn read_rules_meta(path: &Path) -> Result<RulesMeta> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| Error::RulesMeta {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_report_file_with_metadata() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        fs::write(
            &path,
            r#"{
  "results": [
    {"filePath": "/repo/a.js", "messages": [{"ruleId": "semi", "severity": 2, "line": 1, "column": 5, "message": "Missing semicolon."}], "errorCount": 1, "warningCount": 0}
  ],
  "metadata": {"rulesMeta": {"semi": {"docs": {"url": "https://eslint.org/docs/latest/rules/semi"}}}}
}"#,
        )
        .unwrap();

        let (results, meta) = read_report(path.to_str()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].messages[0].column, 5);
        assert!(meta.unwrap().contains_key("semi"));
    }

    #[test]
    fn test_parse_report_error_names_origin() {
        let err = parse_report("{\"nope\": true}", "broken.json").unwrap_err();
        assert!(err.to_string().starts_with("broken.json is not a valid lint report"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            read_report(missing.to_str()),
            Err(Error::Io { .. })
        ));
        assert!(matches!(read_rules_meta(&missing), Err(Error::Io { .. })));
    }

    #[test]
    fn test_read_rules_meta() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("meta.json");
        fs::write(&path, r#"{"no-console": {"docs": {"url": "u"}}}"#).unwrap();
        let meta = read_rules_meta(&path).unwrap();
        assert_eq!(meta["no-console"]["docs"]["url"], "u");

        fs::write(&path, "[1, 2]").unwrap();
        assert!(matches!(read_rules_meta(&path), Err(Error::RulesMeta { .. })));
    }
}
