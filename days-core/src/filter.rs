//! List-time filters over event records.
//!
//! A listing uses exactly one `ListFilter`. Each filter is a pure function of
//! the record, the reference "today", and its own parameters.

use std::cmp::Ordering;

use crate::date::DateValue;
use crate::event::EventRecord;

/// A date parameter as the user supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateArg {
    /// The option was given without a value
    Missing,
    /// A value was given but is not a valid date
    Malformed(String),
    Date(DateValue),
}

impl DateArg {
    /// `None` means the option had no value.
    pub fn from_option(value: Option<&str>) -> Self {
        match value {
            None => DateArg::Missing,
            Some(text) => match DateValue::parse(text) {
                Ok(date) => DateArg::Date(date),
                Err(_) => DateArg::Malformed(text.to_string()),
            },
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, DateArg::Missing)
    }

    /// Order of this argument relative to `other`, or `None` when there is no
    /// usable date. Every comparison against `None` counts as false.
    fn partial_cmp_date(&self, other: &DateValue) -> Option<Ordering> {
        match self {
            DateArg::Date(date) => Some(date.cmp(other)),
            DateArg::Missing | DateArg::Malformed(_) => None,
        }
    }

    fn eq_date(&self, other: &DateValue) -> bool {
        self.partial_cmp_date(other) == Some(Ordering::Equal)
    }

    fn gt_date(&self, other: &DateValue) -> bool {
        self.partial_cmp_date(other) == Some(Ordering::Greater)
    }
}

/// What to do with a record during a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Skip,
    /// Abandon the whole listing
    Stop,
}

impl Verdict {
    fn keep_if(keep: bool) -> Self {
        if keep { Verdict::Keep } else { Verdict::Skip }
    }
}

/// The single filter selected for a listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListFilter {
    /// No option: every record is kept
    #[default]
    All,
    /// Only records dated today
    Today,
    /// Only records on exactly this date. A malformed date matches nothing.
    OnDate(DateArg),
    /// Records strictly before the date. A malformed date matches nothing.
    Before(DateArg),
    /// Records on or after the date. A malformed date excludes nothing.
    After(DateArg),
    /// Records on or after `after` and strictly before `before`
    Range { before: DateArg, after: DateArg },
    /// Records whose category is (or, with `exclude`, is not) in a
    /// comma-separated list
    Categories { list: String, exclude: bool },
    /// Records with an empty category
    NoCategory,
}

impl ListFilter {
    /// Name of a required parameter that was not supplied, if any.
    pub fn missing_parameter(&self) -> Option<&'static str> {
        match self {
            ListFilter::Before(date) | ListFilter::After(date) if date.is_missing() => Some("date"),
            ListFilter::Range { before, after } if before.is_missing() || after.is_missing() => {
                Some("date")
            }
            _ => None,
        }
    }

    pub fn evaluate(&self, record: &EventRecord, today: &DateValue) -> Verdict {
        if self.missing_parameter().is_some() {
            return Verdict::Stop;
        }

        let ts = record.timestamp();
        match self {
            ListFilter::All => Verdict::Keep,
            ListFilter::Today => Verdict::keep_if(today.days_until(ts) == 0),
            ListFilter::OnDate(date) => Verdict::keep_if(date.eq_date(ts)),
            // A malformed upper bound keeps nothing; a malformed lower bound
            // never excludes.
            ListFilter::Before(before) => Verdict::keep_if(before.gt_date(ts)),
            ListFilter::After(after) => Verdict::keep_if(!after.gt_date(ts)),
            ListFilter::Range { before, after } => {
                Verdict::keep_if(before.gt_date(ts) && !after.gt_date(ts))
            }
            ListFilter::Categories { list, exclude } => {
                Verdict::keep_if(category_listed(list, record.category()) != *exclude)
            }
            ListFilter::NoCategory => Verdict::keep_if(record.is_uncategorized()),
        }
    }
}

/// Whether `category` appears in `list`.
///
/// A list without commas is a single category name. A trailing comma does not
/// add an empty name, so `"work,"` does not match uncategorized records.
fn category_listed(list: &str, category: &str) -> bool {
    if !list.contains(',') {
        return list == category;
    }
    let names = list.strip_suffix(',').unwrap_or(list);
    names.split(',').any(|name| name == category)
}
