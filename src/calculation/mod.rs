//! Calculation logic for the exemption computation engine.
//!
//! This module contains the eligibility-date derivation, the 32-year
//! overlap-window ratio, per-grant impact processing, and the summary
//! aggregation that combines them with the cap table and the price-index
//! service.

mod dates;
mod eligibility;
mod grant_impact;
mod summary;
mod window_ratio;

pub use eligibility::eligibility_date;
pub use grant_impact::{GrantComputation, grant_impact_multiplier, process_grant};
pub use summary::SummaryCalculator;
pub use window_ratio::{WINDOW_YEARS, window_ratio};

pub(crate) use dates::shift_years;
