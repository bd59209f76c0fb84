//! Errors raised at the binary's edges: reading input, rules metadata, config.
//!
//! Aggregation and rendering never fail; malformed data degrades to defaults.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),
    #[error("{origin} is not a valid lint report: {source}")]
    Report {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path} is not a valid rules metadata file: {source}")]
    RulesMeta {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to parse config {path}: {message}")]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
