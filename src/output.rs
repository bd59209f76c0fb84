//! Report rendering.
//!
//! Layout, top to bottom:
//! - a leading blank line (plus the working-directory hint on terminals),
//! - the warning summary, one row per rule,
//! - the error details, one block per file with column-aligned rows,
//! - the totals line.
//!
//! A run with no errors and no warnings renders as an empty string.

use crate::aggregate::aggregate;
use crate::docs::DocsResolver;
use crate::models::{Aggregate, LineItem, LintResult, MessageRow};
use crate::terminal::{self, Capabilities};
use crate::text::{display_width, plural};
use owo_colors::{OwoColorize, Style};
use std::path::Path;

fn paint(color: bool, text: &str, style: Style) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

fn pad(width: usize) -> String {
    " ".repeat(width)
}

/// Aggregate `results` and render them in one step.
pub fn format_results(
    results: &[LintResult],
    caps: &Capabilities,
    cwd: &Path,
    docs: &DocsResolver,
) -> String {
    let agg = aggregate(results, cwd, caps.color);
    compose_report(&agg, caps, cwd, docs)
}

/// Compose the report text (pure) for an aggregate.
pub fn compose_report(
    agg: &Aggregate,
    caps: &Capabilities,
    cwd: &Path,
    docs: &DocsResolver,
) -> String {
    let color = caps.color;
    let mut out = String::from("\n");

    if caps.show_cwd_hint() {
        out.push_str(&terminal::set_cwd(cwd));
    }

    if !agg.summary.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            paint(color, "Warning summary", Style::new().blue())
        ));
        for (rule_id, entry) in agg.summary.iter() {
            // label reads "errors" although these are warning counts
            out.push_str(&format!(
                "  {}{}  {} errors in {} files\n",
                paint(color, rule_id, Style::new().bright_black()),
                pad(agg.max_rule_width.saturating_sub(display_width(rule_id))),
                paint(color, &entry.count.to_string(), Style::new().yellow()),
                paint(color, &entry.files.len().to_string(), Style::new().yellow()),
            ));
        }
        out.push('\n');
    }

    if agg.error_count > 0 {
        out.push_str(&format!(
            "  {}\n",
            paint(color, "Error details", Style::new().blue())
        ));
        let rows: Vec<String> = agg
            .lines
            .iter()
            .map(|item| match item {
                LineItem::Separator => String::new(),
                LineItem::Header {
                    relative_file_path,
                    first_line_col,
                    ..
                } => render_header(agg, relative_file_path, first_line_col, color),
                LineItem::Message(row) => render_message(agg, row, caps, docs),
            })
            .collect();
        out.push_str(&rows.join("\n"));
        out.push_str("\n\n");
    }

    if agg.warning_count > 0 {
        let text = format!(
            "{} {}",
            agg.warning_count,
            plural("warning", agg.warning_count)
        );
        out.push_str("  ");
        out.push_str(&paint(color, &text, Style::new().yellow()));
    }

    if agg.error_count > 0 {
        let text = format!("{} {}", agg.error_count, plural("error", agg.error_count));
        out.push_str(", ");
        out.push_str(&paint(color, &text, Style::new().red()));
        out.push('\n');
    }

    if agg.error_count + agg.warning_count > 0 {
        out
    } else {
        String::new()
    }
}

/// Underlined path, followed by a concealed `:line:column` so terminals
/// can open the file at the first problem.
fn render_header(
    agg: &Aggregate,
    relative_file_path: &str,
    first_line_col: &str,
    color: bool,
) -> String {
    let position = if agg.show_line_numbers {
        paint(
            color,
            &format!(":{}", first_line_col),
            Style::new().hidden().dimmed().bright_black(),
        )
    } else {
        String::new()
    };
    format!(
        "  {}{}",
        paint(color, relative_file_path, Style::new().underline()),
        position
    )
}

fn render_message(
    agg: &Aggregate,
    row: &MessageRow,
    caps: &Capabilities,
    docs: &DocsResolver,
) -> String {
    let color = caps.color;
    let mut cells = vec![String::new(), row.severity.label().to_string()];

    if agg.show_line_numbers {
        let position = format!(
            "{}{}{}",
            row.line,
            paint(color, ":", Style::new().bright_black()),
            row.column
        );
        cells.push(format!(
            "{}{}",
            pad(agg.max_line_width.saturating_sub(row.line_width)),
            paint(color, &position, Style::new().dimmed())
        ));
    }

    cells.push(format!(
        "{}{}",
        pad(agg.max_column_width.saturating_sub(row.column_width)),
        row.message
    ));

    let rule = paint(color, &row.rule_id, Style::new().dimmed());
    let rule = match caps.hyperlinks.then(|| docs.resolve(&row.rule_id)).flatten() {
        Some(url) => terminal::link(&rule, &url),
        None => rule,
    };
    cells.push(format!(
        "{}{}",
        pad(agg.max_message_width.saturating_sub(row.message_width)),
        rule
    ));

    cells.join("  ")
}

/// Write a composed report to stdout. Nothing is printed for an empty report.
pub fn print_report(report: &str) {
    if report.is_empty() {
        return;
    }
    print!("{}", report);
    if !report.ends_with('\n') {
        println!();
    }
}

/// `error:` prefix for diagnostics on stderr.
pub fn error_prefix(color: bool) -> String {
    paint(color, "error:", Style::new().red().bold())
}
