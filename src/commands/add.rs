use std::path::Path;

use anyhow::{Context, Result};
use days_core::{DateValue, DaysError, DaysResult, store};
use owo_colors::OwoColorize;

/// Build the stored row for a new event.
///
/// Without `date` the event is dated `today`. Category and description are
/// both required; either missing is `InvalidOptions`.
pub fn build_row(
    today: &DateValue,
    date: Option<&str>,
    category: Option<&str>,
    description: Option<&str>,
) -> DaysResult<String> {
    let (Some(category), Some(description)) = (category, description) else {
        return Err(DaysError::InvalidOptions);
    };

    let timestamp = match date {
        Some(text) => DateValue::parse(text)?,
        None => *today,
    };

    Ok(store::format_row(&timestamp.to_string(), category, description))
}

pub fn run(
    events_path: &Path,
    today: &DateValue,
    date: Option<String>,
    category: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let row = match build_row(today, date.as_deref(), category.as_deref(), description.as_deref()) {
        Ok(row) => row,
        Err(err @ (DaysError::InvalidOptions | DaysError::MalformedDate(_))) => {
            println!("{}", err.to_string().yellow());
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    store::append_row(events_path, &row)
        .with_context(|| format!("Failed to add event to {}", events_path.display()))?;
    log::info!("added: {}", row);

    Ok(())
}
