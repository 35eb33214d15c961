//! 32-year overlap-window ratio calculation.
//!
//! Only work time falling inside the trailing 32-calendar-year window
//! ending at the reference date counts toward a grant's exemption impact.
//! This module computes the fraction of a work period inside that window.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::shift_years;

/// The length of the trailing window, in calendar years.
pub const WINDOW_YEARS: i32 = 32;

/// Computes the fraction of a work period inside the trailing 32-year
/// window ending at `reference_date`.
///
/// The window starts 32 calendar years before the reference date
/// (preserving month/day where valid). The overlap in days between
/// [`work_start`, `work_end`] and [window start, reference date] is divided
/// by the work period's own length in days. A zero-length work period
/// yields 0 rather than dividing by zero.
///
/// # Returns
///
/// A ratio in [0, 1], rounded to 4 decimal places.
///
/// # Examples
///
/// ```
/// use exemption_engine::calculation::window_ratio;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let ratio = window_ratio(
///     NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2010, 12, 31).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
/// );
/// assert_eq!(ratio, Decimal::ONE);
/// ```
pub fn window_ratio(
    work_start: NaiveDate,
    work_end: NaiveDate,
    reference_date: NaiveDate,
) -> Decimal {
    let window_start = shift_years(reference_date, -WINDOW_YEARS);

    let overlap_start = work_start.max(window_start);
    let overlap_end = work_end.min(reference_date);
    let overlap_days = (overlap_end - overlap_start).num_days().max(0);

    let total_days = (work_end - work_start).num_days();
    if total_days <= 0 {
        return Decimal::ZERO;
    }

    let ratio = Decimal::from(overlap_days) / Decimal::from(total_days);
    ratio.clamp(Decimal::ZERO, Decimal::ONE).round_dp(4)
}
