//! Display formatting for report dates.
//!
//! Report dates are calendar dates with no time or zone, so they are parsed
//! as `NaiveDate` and never shifted by the viewer's offset.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::NaiveDate;

/// Format a `YYYY-MM-DD` string as `M/D/YYYY`. Unparsable input is returned
/// unchanged.
pub fn format_report_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_owned(),
    }
}
