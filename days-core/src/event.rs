//! Event records and loading them from raw storage rows.

use std::fmt;

use log::debug;

use crate::date::DateValue;

/// One stored event. An empty category means "uncategorized".
///
/// Records are read-only once loaded; the fields are only reachable through
/// accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    timestamp: DateValue,
    category: String,
    description: String,
}

impl EventRecord {
    pub fn new(timestamp: DateValue, category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            timestamp,
            category: category.into(),
            description: description.into(),
        }
    }

    pub fn timestamp(&self) -> &DateValue {
        &self.timestamp
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_uncategorized(&self) -> bool {
        self.category.is_empty()
    }
}

impl fmt::Display for EventRecord {
    /// `YYYY-MM-DD: description (category)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.timestamp, self.description, self.category)
    }
}

/// A storage row that was skipped because its date did not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDiagnostic {
    /// Zero-based data row index (the header is not counted)
    pub row: usize,
    pub raw_date: String,
}

impl fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bad date at row {}: {}", self.row, self.raw_date)
    }
}

/// Result of turning raw rows into records.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Records in original row order
    pub events: Vec<EventRecord>,
    /// One entry per skipped row
    pub diagnostics: Vec<RowDiagnostic>,
}

/// Build records from parallel date/category/description columns.
///
/// Rows whose date does not parse are skipped and reported; a bad row never
/// stops the rest of the load. Columns shorter than `dates` read as empty.
pub fn load_records(dates: &[String], categories: &[String], descriptions: &[String]) -> LoadReport {
    let mut report = LoadReport::default();

    for (i, raw_date) in dates.iter().enumerate() {
        let timestamp = match DateValue::parse(raw_date) {
            Ok(date) => date,
            Err(_) => {
                report.diagnostics.push(RowDiagnostic {
                    row: i,
                    raw_date: raw_date.clone(),
                });
                continue;
            }
        };

        let category = categories.get(i).cloned().unwrap_or_default();
        let description = descriptions.get(i).cloned().unwrap_or_default();
        report.events.push(EventRecord::new(timestamp, category, description));
    }

    debug!(
        "loaded {} events, skipped {} rows",
        report.events.len(),
        report.diagnostics.len()
    );

    report
}
