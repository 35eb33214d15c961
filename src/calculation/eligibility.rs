//! Eligibility-date derivation.
//!
//! The eligibility date is the date from which a retiree's pension becomes
//! subject to the exemption-capital rule: the later of the statutory
//! retirement date and the pension start date.

use chrono::NaiveDate;

use crate::models::Gender;

use super::shift_years;

/// Derives the eligibility date from birth date, gender, and pension start.
///
/// The statutory retirement date is the birth date shifted forward by 67
/// years for men or 62 years for women, preserving month and day. The
/// result is whichever of that date and `pension_start` is later.
///
/// Pure function, no failure modes.
///
/// # Examples
///
/// ```
/// use exemption_engine::calculation::eligibility_date;
/// use exemption_engine::models::Gender;
/// use chrono::NaiveDate;
///
/// let birth = NaiveDate::from_ymd_opt(1960, 5, 1).unwrap();
/// let pension_start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// assert_eq!(
///     eligibility_date(birth, Gender::Male, pension_start),
///     NaiveDate::from_ymd_opt(2027, 5, 1).unwrap()
/// );
/// ```
pub fn eligibility_date(
    birth_date: NaiveDate,
    gender: Gender,
    pension_start: NaiveDate,
) -> NaiveDate {
    let legal_retirement = shift_years(birth_date, gender.retirement_age_years());
    legal_retirement.max(pension_start)
}
