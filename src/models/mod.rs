//! Shared data models: linter results going in, report line items coming out.
//!
//! Input types deserialize from the conventional JSON report a linter
//! emits (`filePath`, `messages`, `errorCount`, ...). Every field is
//! lenient: a missing or oddly-typed value falls back to its default so
//! one bad message never rejects the whole report.

pub mod report;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as Json;

pub use report::{Aggregate, LineItem, MessageRow, Summary, SummaryEntry};

/// Rule metadata keyed by rule id, e.g. `{"no-console": {"docs": {"url": ...}}}`.
///
/// Kept untyped so malformed entries degrade to "no documentation".
pub type RulesMeta = serde_json::Map<String, Json>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Message severity. `2`/`"error"` is an error; everything else a warning.
pub enum Severity {
    #[default]
    Warning,
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Json::deserialize(deserializer)?;
        let sev = match raw {
            Json::Number(n) if n.as_f64() == Some(2.0) => Severity::Error,
            Json::String(s) if s == "error" => Severity::Error,
            _ => Severity::Warning,
        };
        Ok(sev)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A single diagnostic reported for a file.
pub struct LintMessage {
    /// 1-based line, 0 when unknown.
    #[serde(default, deserialize_with = "lenient::count")]
    pub line: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub column: u64,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub fatal: bool,
    /// Empty for fatal parse errors.
    #[serde(default, deserialize_with = "lenient::text")]
    pub rule_id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub message: String,
}

impl LintMessage {
    /// Fatal messages count as errors whatever their severity says.
    pub fn is_error(&self) -> bool {
        self.fatal || self.severity == Severity::Error
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// All diagnostics for one analyzed file.
pub struct LintResult {
    #[serde(default, deserialize_with = "lenient::text")]
    pub file_path: String,
    #[serde(default, deserialize_with = "lenient::messages")]
    pub messages: Vec<LintMessage>,
    #[serde(default, deserialize_with = "lenient::usize_count")]
    pub error_count: usize,
    #[serde(default, deserialize_with = "lenient::usize_count")]
    pub warning_count: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Auxiliary data shipped next to the results (the `metadata` envelope).
pub struct ReportMetadata {
    #[serde(default)]
    pub rules_meta: Option<RulesMeta>,
}

#[derive(Debug, Clone)]
/// Accepted report shapes: a bare results array or `{results, metadata}`.
pub enum ReportInput {
    Results(Vec<LintResult>),
    WithMetadata {
        results: Vec<LintResult>,
        metadata: Option<ReportMetadata>,
    },
}

#[derive(Deserialize)]
struct Envelope {
    results: Vec<LintResult>,
    #[serde(default)]
    metadata: Option<ReportMetadata>,
}

// Dispatch on the top-level JSON type; errors come from the matched shape.
impl<'de> Deserialize<'de> for ReportInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;
        match Json::deserialize(deserializer)? {
            raw @ Json::Array(_) => serde_json::from_value(raw)
                .map(ReportInput::Results)
                .map_err(D::Error::custom),
            raw @ Json::Object(_) => serde_json::from_value::<Envelope>(raw)
                .map(|e| ReportInput::WithMetadata {
                    results: e.results,
                    metadata: e.metadata,
                })
                .map_err(D::Error::custom),
            _ => Err(D::Error::custom(
                "expected an array of results or an object with a `results` array",
            )),
        }
    }
}

impl ReportInput {
    pub fn into_parts(self) -> (Vec<LintResult>, Option<RulesMeta>) {
        match self {
            ReportInput::Results(results) => (results, None),
            ReportInput::WithMetadata { results, metadata } => {
                (results, metadata.and_then(|m| m.rules_meta))
            }
        }
    }
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value as Json;

    pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
        Ok(Json::deserialize(d)?.as_u64().unwrap_or(0))
    }

    pub fn usize_count<'de, D: Deserializer<'de>>(d: D) -> Result<usize, D::Error> {
        let n = Json::deserialize(d)?.as_u64().unwrap_or(0);
        Ok(usize::try_from(n).unwrap_or(usize::MAX))
    }

    pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        Ok(Json::deserialize(d)?.as_bool().unwrap_or(false))
    }

    /// Entries that are not message objects are dropped; a non-array is empty.
    pub fn messages<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<super::LintMessage>, D::Error> {
        let raw = match Json::deserialize(d)? {
            Json::Array(items) => items,
            _ => return Ok(Vec::new()),
        };
        let total = raw.len();
        let kept: Vec<super::LintMessage> = raw
            .into_iter()
            .filter(Json::is_object)
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect();
        if kept.len() < total {
            tracing::debug!(dropped = total - kept.len(), "skipped malformed messages");
        }
        Ok(kept)
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(match Json::deserialize(d)? {
            Json::String(s) => s,
            _ => String::new(),
        })
    }
}
