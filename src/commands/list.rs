use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use days_core::{DateArg, DateValue, ListFilter, list_events, store};
use owo_colors::OwoColorize;

/// Filter options for `days list`. At most one filter applies, except that
/// `--before-date` and `--after-date` combine into a range.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only events dated today
    #[arg(
        long,
        conflicts_with_all = ["date", "before_date", "after_date", "categories", "no_category"]
    )]
    pub today: bool,

    /// Only events on this date (YYYY-MM-DD)
    #[arg(
        long,
        value_name = "DATE",
        conflicts_with_all = ["before_date", "after_date", "categories", "no_category"]
    )]
    pub date: Option<String>,

    /// Only events strictly before this date (YYYY-MM-DD)
    #[arg(
        long,
        value_name = "DATE",
        num_args = 0..=1,
        conflicts_with_all = ["categories", "no_category"]
    )]
    pub before_date: Option<Option<String>>,

    /// Only events on or after this date (YYYY-MM-DD)
    #[arg(
        long,
        value_name = "DATE",
        num_args = 0..=1,
        conflicts_with_all = ["categories", "no_category"]
    )]
    pub after_date: Option<Option<String>>,

    /// Only events in these comma-separated categories
    #[arg(long, value_name = "LIST", conflicts_with = "no_category")]
    pub categories: Option<String>,

    /// Invert --categories: hide events in the listed categories
    #[arg(long, requires = "categories")]
    pub exclude: bool,

    /// Only events without a category
    #[arg(long)]
    pub no_category: bool,
}

impl ListArgs {
    /// Turn the parsed options into the one filter the listing applies.
    pub fn filter(&self) -> ListFilter {
        let date_arg = |value: &Option<String>| DateArg::from_option(value.as_deref());

        if self.today {
            return ListFilter::Today;
        }
        if let Some(date) = &self.date {
            return ListFilter::OnDate(DateArg::from_option(Some(date.as_str())));
        }

        match (&self.before_date, &self.after_date) {
            (Some(before), Some(after)) => ListFilter::Range {
                before: date_arg(before),
                after: date_arg(after),
            },
            (Some(before), None) => ListFilter::Before(date_arg(before)),
            (None, Some(after)) => ListFilter::After(date_arg(after)),
            (None, None) => match &self.categories {
                Some(list) => ListFilter::Categories {
                    list: list.clone(),
                    exclude: self.exclude,
                },
                None if self.no_category => ListFilter::NoCategory,
                None => ListFilter::All,
            },
        }
    }
}

pub fn run(events_path: &Path, args: &ListArgs, today: &DateValue) -> Result<()> {
    let report = store::load(events_path)
        .with_context(|| format!("Failed to read events from {}", events_path.display()))?;

    for diagnostic in &report.diagnostics {
        eprintln!("{}", diagnostic);
    }

    let filter = args.filter();
    log::debug!("list filter: {:?}", filter);

    let outcome = list_events(&report.events, &filter, today);
    for line in &outcome.lines {
        println!("{}", line);
    }
    if let Some(notice) = outcome.notice {
        println!("{}", notice.to_string().yellow());
    }

    Ok(())
}
