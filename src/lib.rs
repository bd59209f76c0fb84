//! pretty-lint core library.
//!
//! This crate turns linter JSON results (per-file lists of rule
//! violations) into a human-readable terminal report: files sorted by
//! noise, warnings folded into a per-rule summary, errors listed in
//! column-aligned rows with links to rule documentation.
//!
//! High-level modules:
//! - `models`: Input results and the aggregated report structures.
//! - `text`: Display width and inline code emphasis.
//! - `aggregate`: Sorting, classification, summary and column widths.
//! - `docs`: Rule documentation URL resolution.
//! - `terminal`: Capability detection and escape sequences.
//! - `output`: Report composition and printing.
//! - `config`: Discovery and effective configuration resolution.
//! - `input`: Reading reports and rules metadata.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `error`: Errors raised while loading input and config.
pub mod aggregate;
pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod terminal;
pub mod text;

pub use aggregate::aggregate;
pub use docs::{resolve_doc_url, BuiltinRuleDocs, DocsResolver, NoRuleDocs, RuleDocsLookup};
pub use models::{Aggregate, LineItem, LintMessage, LintResult, RulesMeta, Severity};
pub use output::{compose_report, format_results};
pub use terminal::Capabilities;
