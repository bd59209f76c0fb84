//! Aggregated report structures handed from the aggregator to the renderer.

use super::Severity;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One rendered row of the error details block.
pub enum LineItem {
    /// Blank line between files.
    Separator,
    Header {
        file_path: String,
        relative_file_path: String,
        /// `line:column` of the first error (or first message).
        first_line_col: String,
    },
    Message(MessageRow),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A message row with its pre-measured display widths.
pub struct MessageRow {
    pub severity: Severity,
    pub line: String,
    pub line_width: usize,
    pub column: String,
    pub column_width: usize,
    pub message: String,
    pub message_width: usize,
    pub rule_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Warning tally for a single rule.
pub struct SummaryEntry {
    pub count: usize,
    /// Distinct files in first-seen order.
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Rule-keyed warning summary, iterated in first-seen rule order.
pub struct Summary {
    entries: Vec<(String, SummaryEntry)>,
}

impl Summary {
    /// Count one warning of `rule_id` found in `file_path`.
    pub fn record(&mut self, rule_id: &str, file_path: &str) {
        let idx = match self.entries.iter().position(|(id, _)| id == rule_id) {
            Some(idx) => idx,
            None => {
                self.entries
                    .push((rule_id.to_string(), SummaryEntry::default()));
                self.entries.len() - 1
            }
        };
        let entry = &mut self.entries[idx].1;
        entry.count += 1;
        if !entry.files.iter().any(|f| f == file_path) {
            entry.files.push(file_path.to_string());
        }
    }

    pub fn get(&self, rule_id: &str) -> Option<&SummaryEntry> {
        self.entries
            .iter()
            .find(|(id, _)| id == rule_id)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SummaryEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Everything the renderer needs: ordered line items, totals and column maxima.
pub struct Aggregate {
    pub lines: Vec<LineItem>,
    pub error_count: usize,
    pub warning_count: usize,
    pub max_line_width: usize,
    pub max_column_width: usize,
    pub max_message_width: usize,
    pub max_rule_width: usize,
    pub show_line_numbers: bool,
    pub summary: Summary,
}
