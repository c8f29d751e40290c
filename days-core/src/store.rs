//! The events file on disk.
//!
//! A CSV file with a header row naming `date`, `category` and `description`
//! columns in any order. Appends and deletions rewrite the whole file through
//! a temporary file in the same directory, replacing the original only once
//! the new content is complete.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::{debug, info};
use tempfile::NamedTempFile;

use crate::constants::{CATEGORY_COLUMN, DATE_COLUMN, DESCRIPTION_COLUMN, EVENTS_HEADER};
use crate::error::{DaysError, DaysResult};
use crate::event::{LoadReport, load_records};

/// Raw column values, one entry per data row.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Columns {
    pub dates: Vec<String>,
    pub categories: Vec<String>,
    pub descriptions: Vec<String>,
}

/// Rows removed (or, in a dry run, that would be removed) by `delete_matching`.
#[derive(Debug, Default)]
pub struct DeleteReport {
    pub removed: Vec<String>,
    pub dry_run: bool,
}

/// Create the events file with just a header if it does not exist yet.
pub fn ensure_events_file(path: &Path) -> DaysResult<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("{EVENTS_HEADER}\n"))?;
    info!("created {}", path.display());
    Ok(())
}

/// Parse CSV text into its three named columns.
///
/// Blank lines are ignored. Rows with fewer fields than the header read the
/// missing fields as empty strings.
pub fn parse_columns(content: &str) -> DaysResult<Columns> {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());

    let Some(header) = lines.next() else {
        return Ok(Columns::default());
    };
    let header = split_fields(header);
    let position = |name: &str| {
        header
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| DaysError::MissingColumn(name.to_string()))
    };
    let date_idx = position(DATE_COLUMN)?;
    let category_idx = position(CATEGORY_COLUMN)?;
    let description_idx = position(DESCRIPTION_COLUMN)?;

    let mut columns = Columns::default();
    for line in lines {
        let fields = split_fields(line);
        let field = |idx: usize| fields.get(idx).cloned().unwrap_or_default();
        columns.dates.push(field(date_idx));
        columns.categories.push(field(category_idx));
        columns.descriptions.push(field(description_idx));
    }

    Ok(columns)
}

/// Read the events file into records, skipping rows with bad dates.
pub fn load(path: &Path) -> DaysResult<LoadReport> {
    let content = fs::read_to_string(path)?;
    let columns = parse_columns(&content)?;
    debug!("read {} rows from {}", columns.dates.len(), path.display());
    Ok(load_records(
        &columns.dates,
        &columns.categories,
        &columns.descriptions,
    ))
}

/// Serialize one row as `date,category,description`.
pub fn format_row(date: &str, category: &str, description: &str) -> String {
    [date, category, description]
        .iter()
        .map(|field| escape_field(field))
        .collect::<Vec<_>>()
        .join(",")
}

/// Append a row to the end of the events file.
pub fn append_row(path: &Path, row: &str) -> DaysResult<()> {
    let mut content = fs::read_to_string(path)?;
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(row);
    content.push('\n');

    replace_contents(path, &content)?;
    debug!("appended row to {}", path.display());
    Ok(())
}

/// Remove every data row whose raw text contains `needle`.
///
/// Matching is a plain substring test on the stored line, so a date that
/// appears inside a description also removes that row. The header (the first
/// non-blank line, as `parse_columns` reads it) is never removed. With
/// `dry_run` the file is left untouched.
pub fn delete_matching(path: &Path, needle: &str, dry_run: bool) -> DaysResult<DeleteReport> {
    if needle.is_empty() {
        return Err(DaysError::MissingParameter("date"));
    }

    let content = fs::read_to_string(path)?;
    let mut report = DeleteReport {
        removed: Vec::new(),
        dry_run,
    };
    let mut kept = String::with_capacity(content.len());
    let mut header_seen = false;

    for line in content.lines() {
        let is_header = !header_seen && !line.trim().is_empty();
        header_seen |= is_header;
        if !is_header && line.contains(needle) {
            report.removed.push(line.to_string());
            continue;
        }
        kept.push_str(line);
        kept.push('\n');
    }

    if dry_run {
        debug!("dry run, {} rows would be removed", report.removed.len());
    } else {
        replace_contents(path, &kept)?;
        info!("removed {} rows from {}", report.removed.len(), path.display());
    }

    Ok(report)
}

/// Write `content` to a temporary file beside `path`, then move it over `path`.
fn replace_contents(path: &Path, content: &str) -> DaysResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(content.as_bytes())?;
    temp.flush()?;
    temp.persist(path).map_err(|e| DaysError::Io(e.error))?;
    Ok(())
}

/// Split one CSV line into fields, honoring double-quoted fields.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Quote a field if it would otherwise break the row. Newlines become spaces.
fn escape_field(field: &str) -> String {
    let field = field.replace(['\r', '\n'], " ");
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field
    }
}
