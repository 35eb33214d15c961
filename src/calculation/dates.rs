//! Calendar-year date arithmetic shared by the calculation modules.

use chrono::{Datelike, NaiveDate};

/// Shifts a date by whole calendar years, preserving month and day.
///
/// The only month/day combination that can become invalid is February 29
/// in a non-leap target year; it lands on February 28.
pub(crate) fn shift_years(date: NaiveDate, years: i32) -> NaiveDate {
    let target_year = date.year() + years;
    match NaiveDate::from_ymd_opt(target_year, date.month(), date.day()) {
        Some(shifted) => shifted,
        None => NaiveDate::from_ymd_opt(target_year, 2, 28)
            .expect("February 28 is valid in every year"),
    }
}
