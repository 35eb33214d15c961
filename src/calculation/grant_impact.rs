//! Per-grant impact processing.
//!
//! Combines the price-index service and the 32-year window ratio into a
//! single grant's reduction of exemption capital. Failures never escape:
//! a grant with missing data or an unreachable index calculator resolves
//! to zeroed figures with an explanatory status.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::indexation::IndexationProvider;
use crate::models::{Grant, GrantFigures, GrantStatus};

use super::window_ratio;

/// Returns the multiplier converting a window-limited indexed grant into
/// its reduction of exemption capital.
///
/// The multiplier is 1.35, an opaque policy constant of the
/// capital-exemption scheme.
pub fn grant_impact_multiplier() -> Decimal {
    Decimal::new(135, 2)
}

/// The result of processing a single grant against an eligibility date.
#[derive(Debug, Clone, PartialEq)]
pub struct GrantComputation {
    /// The id of the processed grant.
    pub grant_id: i64,
    /// How processing ended.
    pub status: GrantStatus,
    /// The derived figures (zeroed unless the status is
    /// [`GrantStatus::Computed`]).
    pub figures: GrantFigures,
}

impl GrantComputation {
    /// Returns true if the grant entered the aggregate totals.
    pub fn is_valid(&self) -> bool {
        self.status == GrantStatus::Computed
    }
}

/// Processes one grant into its indexed, window-limited impact figures.
///
/// Steps:
/// 1. A grant missing its amount or either work date is skipped before
///    any indexation attempt (`MissingData`).
/// 2. The nominal amount is indexed from the work-end date to the
///    eligibility date. An unavailable calculator excludes the grant
///    (`IndexationUnavailable`) with zeroed figures.
/// 3. The window ratio limits the indexed amount, and the 1.35 multiplier
///    converts the limited amount into the exemption-capital impact.
///
/// A zero nominal amount short-circuits to zeroed figures without calling
/// the calculator; the indexed value of zero is zero.
///
/// This function is pure apart from the provider call: it never writes the
/// figures back to the grant. Persisting them is the caller's decision.
pub fn process_grant(
    grant: &Grant,
    eligibility_date: NaiveDate,
    provider: &dyn IndexationProvider,
) -> GrantComputation {
    let Some((amount, work_start, work_end)) = grant.complete_data() else {
        warn!(
            grant_id = grant.id,
            employer = %grant.employer_name,
            "grant skipped: amount or work dates missing"
        );
        return GrantComputation {
            grant_id: grant.id,
            status: GrantStatus::MissingData,
            figures: GrantFigures::zeroed(),
        };
    };

    if amount.is_zero() {
        return GrantComputation {
            grant_id: grant.id,
            status: GrantStatus::Computed,
            figures: GrantFigures::zeroed(),
        };
    }

    let indexed_full = match provider.index_amount(amount, work_end, Some(eligibility_date)) {
        Ok(indexed) => indexed,
        Err(e) => {
            warn!(
                grant_id = grant.id,
                %work_end,
                %eligibility_date,
                error = %e,
                "grant excluded: index calculator unavailable"
            );
            return GrantComputation {
                grant_id: grant.id,
                status: GrantStatus::IndexationUnavailable,
                figures: GrantFigures::zeroed(),
            };
        }
    };

    let ratio = window_ratio(work_start, work_end, eligibility_date);
    let limited_indexed = (indexed_full * ratio).round_dp(2);
    let impact_on_exemption = (limited_indexed * grant_impact_multiplier()).round_dp(2);

    debug!(
        grant_id = grant.id,
        %indexed_full,
        %ratio,
        %limited_indexed,
        %impact_on_exemption,
        "grant processed"
    );

    GrantComputation {
        grant_id: grant.id,
        status: GrantStatus::Computed,
        figures: GrantFigures {
            indexed_full,
            window_ratio: ratio,
            limited_indexed,
            impact_on_exemption,
        },
    }
}
