//! Aggregation of raw lint results into report line items.
//!
//! Produces an `Aggregate` with ordered line items, totals, and the column
//! maxima the renderer pads against. Warnings are not listed per line;
//! they are folded into a rule-keyed summary instead.
//!
//! Totals come from two independent sources:
//! - errors are recounted from the messages (`fatal` or error severity),
//! - warnings are taken from each result's own `warningCount`.

use crate::models::{Aggregate, LineItem, LintMessage, LintResult, MessageRow, Severity};
use crate::text::{display_width, emphasize_inline_code};
use std::cmp::Ordering;
use std::path::Path;

/// File order: clean files first, then the noisiest files.
///
/// - equal error counts: more warnings first
/// - `a` has no errors: `a` first
/// - `b` has no errors: `b` first
/// - otherwise more errors first
pub fn compare_results(a: &LintResult, b: &LintResult) -> Ordering {
    if a.error_count == b.error_count {
        return b.warning_count.cmp(&a.warning_count);
    }
    if a.error_count == 0 {
        return Ordering::Less;
    }
    if b.error_count == 0 {
        return Ordering::Greater;
    }
    b.error_count.cmp(&a.error_count)
}

/// Message order within a file.
///
/// Only one direction is special-cased: an error compared against a
/// non-error sorts after it. Every other pair is ordered by line, then column.
pub fn compare_messages(a: &LintMessage, b: &LintMessage) -> Ordering {
    if a.is_error() && !b.is_error() {
        return Ordering::Greater;
    }
    a.line.cmp(&b.line).then(a.column.cmp(&b.column))
}

/// Apply `compare_messages` to one file's messages.
///
/// The comparator is only a total order within one class, so non-errors
/// and errors are sorted separately and errors are placed last.
fn order_messages(messages: &[LintMessage]) -> Vec<&LintMessage> {
    let (mut errors, mut rest): (Vec<&LintMessage>, Vec<&LintMessage>) =
        messages.iter().partition(|m| m.is_error());
    rest.sort_by(|a, b| compare_messages(a, b));
    errors.sort_by(|a, b| compare_messages(a, b));
    rest.extend(errors);
    rest
}

/// `file_path` relative to `cwd`; falls back to the path as given.
pub fn relative_path(file_path: &str, cwd: &Path) -> String {
    let path = Path::new(file_path);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    pathdiff::diff_paths(&absolute, cwd)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| file_path.to_string())
}

/// Build the report aggregate. Pure: the input is not reordered in place.
///
/// `color` controls whether inline code spans in messages are bolded.
pub fn aggregate(results: &[LintResult], cwd: &Path, color: bool) -> Aggregate {
    let mut out = Aggregate::default();

    let mut ordered: Vec<&LintResult> = results.iter().collect();
    ordered.sort_by(|a, b| compare_results(a, b));

    for result in ordered {
        if result.messages.is_empty() {
            tracing::trace!(file = %result.file_path, "no messages; skipped");
            continue;
        }

        out.warning_count += result.warning_count;

        // Warning-only files add no line items, so a file following one
        // must not open with a separator.
        if !out.lines.is_empty() {
            out.lines.push(LineItem::Separator);
        }

        let first = result
            .messages
            .iter()
            .find(|m| m.severity == Severity::Error)
            .or_else(|| result.messages.first());

        let file_errors = result.messages.iter().filter(|m| m.is_error()).count();
        out.error_count += file_errors;

        if file_errors > 0 {
            out.lines.push(LineItem::Header {
                file_path: result.file_path.clone(),
                relative_file_path: relative_path(&result.file_path, cwd),
                first_line_col: first
                    .map(|m| format!("{}:{}", m.line, m.column))
                    .unwrap_or_default(),
            });
        }

        for msg in order_messages(&result.messages) {
            let message = emphasize_inline_code(&msg.message, color);
            let line = msg.line.to_string();
            let column = msg.column.to_string();
            let line_width = display_width(&line);
            let column_width = display_width(&column);
            let message_width = display_width(&message);

            out.max_line_width = out.max_line_width.max(line_width);
            out.max_column_width = out.max_column_width.max(column_width);
            out.max_message_width = out.max_message_width.max(message_width);
            out.max_rule_width = out.max_rule_width.max(display_width(&msg.rule_id));
            out.show_line_numbers = out.show_line_numbers || msg.line != 0 || msg.column != 0;

            if msg.is_error() {
                out.lines.push(LineItem::Message(MessageRow {
                    severity: Severity::Error,
                    line,
                    line_width,
                    column,
                    column_width,
                    message,
                    message_width,
                    rule_id: msg.rule_id.clone(),
                }));
            } else {
                out.summary.record(&msg.rule_id, &result.file_path);
            }
        }
    }

    tracing::debug!(
        errors = out.error_count,
        warnings = out.warning_count,
        rules = out.summary.len(),
        "aggregated lint results"
    );
    out
}
