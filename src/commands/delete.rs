use std::path::Path;

use anyhow::{Context, Result};
use days_core::{DaysError, store};
use owo_colors::OwoColorize;

/// Delete every stored row containing `date` as a substring.
pub fn run(events_path: &Path, date: Option<String>, dry_run: bool) -> Result<()> {
    let needle = date.unwrap_or_default();

    let report = match store::delete_matching(events_path, &needle, dry_run) {
        Ok(report) => report,
        Err(err @ DaysError::MissingParameter(_)) => {
            println!("{}", err.to_string().yellow());
            return Ok(());
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to delete from {}", events_path.display()));
        }
    };

    if report.dry_run {
        println!("{}", "Dry run, would delete:".dimmed());
        for line in &report.removed {
            println!("  {}", line);
        }
    } else {
        let count = report.removed.len();
        let noun = if count == 1 { "event" } else { "events" };
        println!("{}", format!("Deleted {} {}", count, noun).green());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events_file(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.csv");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn deletes_rows_for_date() {
        let (_dir, path) = events_file("date,category,description\n2024-01-01,a,b\n2024-01-02,c,d\n");
        run(&path, Some("2024-01-01".into()), false).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "date,category,description\n2024-01-02,c,d\n"
        );
    }

    #[test]
    fn missing_date_changes_nothing() {
        let original = "date,category,description\n2024-01-01,a,b\n";
        let (_dir, path) = events_file(original);
        run(&path, None, false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn dry_run_changes_nothing() {
        let original = "date,category,description\n2024-01-01,a,b\n";
        let (_dir, path) = events_file(original);
        run(&path, Some("2024-01-01".into()), true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }
}
