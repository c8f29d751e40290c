//! The list operation: filter records and render them relative to today.

use log::debug;

use crate::date::DateValue;
use crate::error::DaysError;
use crate::event::EventRecord;
use crate::filter::{ListFilter, Verdict};

/// Lines produced by a listing.
#[derive(Debug, Default)]
pub struct ListOutcome {
    /// Display lines in storage order
    pub lines: Vec<String>,
    /// Set when the listing was abandoned, e.g. a missing date parameter
    pub notice: Option<DaysError>,
}

/// Run `filter` over `events` and render every kept record.
///
/// Records keep their storage order. A filter that is missing a required
/// parameter stops at the first record with a `MissingParameter` notice, so
/// an empty input produces neither lines nor a notice.
pub fn list_events(events: &[EventRecord], filter: &ListFilter, today: &DateValue) -> ListOutcome {
    let mut outcome = ListOutcome::default();

    for event in events {
        match filter.evaluate(event, today) {
            Verdict::Keep => outcome.lines.push(render_line(event, today)),
            Verdict::Skip => continue,
            Verdict::Stop => {
                let name = filter.missing_parameter().unwrap_or("date");
                outcome.notice = Some(DaysError::MissingParameter(name));
                break;
            }
        }
    }

    debug!("listed {} of {} events", outcome.lines.len(), events.len());
    outcome
}

/// `YYYY-MM-DD: description (category) - <relative day>`
pub fn render_line(event: &EventRecord, today: &DateValue) -> String {
    let delta = today.days_until(event.timestamp());
    format!("{} - {}", event, relative_day(delta))
}

/// Human phrase for a signed day offset from today.
pub fn relative_day(delta: i64) -> String {
    match delta {
        0 => "today".to_string(),
        d if d < 0 => format!("{} days ago", d.unsigned_abs()),
        d => format!("in {} days", d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::DateArg;

    fn date(text: &str) -> DateValue {
        DateValue::parse(text).unwrap()
    }

    fn event(day: &str, category: &str, description: &str) -> EventRecord {
        EventRecord::new(date(day), category, description)
    }

    fn sample() -> Vec<EventRecord> {
        vec![
            event("2024-06-20", "work", "release"),
            event("2024-06-10", "home", "dentist"),
            event("2024-06-15", "", "walk"),
        ]
    }

    // --- relative_day ---

    #[test]
    fn relative_day_phrases() {
        assert_eq!(relative_day(0), "today");
        assert_eq!(relative_day(-5), "5 days ago");
        assert_eq!(relative_day(5), "in 5 days");
        assert_eq!(relative_day(-1), "1 days ago");
    }

    // --- list_events ---

    #[test]
    fn unfiltered_listing_renders_deltas_in_storage_order() {
        let outcome = list_events(&sample(), &ListFilter::All, &date("2024-06-15"));
        assert!(outcome.notice.is_none());
        assert_eq!(
            outcome.lines,
            vec![
                "2024-06-20: release (work) - in 5 days",
                "2024-06-10: dentist (home) - 5 days ago",
                "2024-06-15: walk () - today",
            ]
        );
    }

    #[test]
    fn filter_drops_records() {
        let filter = ListFilter::Categories {
            list: "work,home".into(),
            exclude: true,
        };
        let outcome = list_events(&sample(), &filter, &date("2024-06-15"));
        assert_eq!(outcome.lines, vec!["2024-06-15: walk () - today"]);
    }

    #[test]
    fn today_filter_uses_given_today() {
        let outcome = list_events(&sample(), &ListFilter::Today, &date("2024-06-10"));
        assert_eq!(outcome.lines, vec!["2024-06-10: dentist (home) - today"]);
    }

    #[test]
    fn missing_date_produces_notice_and_no_lines() {
        let outcome = list_events(&sample(), &ListFilter::Before(DateArg::Missing), &date("2024-06-15"));
        assert!(outcome.lines.is_empty());
        let notice = outcome.notice.expect("notice");
        assert!(matches!(notice, DaysError::MissingParameter("date")));
        assert_eq!(notice.to_string(), "Missing date.");
    }

    #[test]
    fn missing_date_with_no_events_is_silent() {
        let outcome = list_events(&[], &ListFilter::After(DateArg::Missing), &date("2024-06-15"));
        assert!(outcome.lines.is_empty());
        assert!(outcome.notice.is_none());
    }

    #[test]
    fn malformed_before_date_lists_nothing() {
        let today = date("2024-06-15");
        let before = ListFilter::Before(DateArg::from_option(Some("2024-02-30")));
        let range = ListFilter::Range {
            before: DateArg::from_option(Some("junk-date!")),
            after: DateArg::from_option(Some("2024-01-01")),
        };
        for filter in [before, range] {
            let outcome = list_events(&sample(), &filter, &today);
            assert!(outcome.lines.is_empty());
            assert!(outcome.notice.is_none());
        }
    }

    #[test]
    fn empty_input_lists_nothing() {
        let outcome = list_events(&[], &ListFilter::All, &date("2024-06-15"));
        assert!(outcome.lines.is_empty());
        assert!(outcome.notice.is_none());
    }
}
