//! Summary models for the exemption computation engine.
//!
//! This module contains the [`ExemptionSummary`] type and its associated
//! structures that capture all outputs of a summary computation, including
//! per-grant breakdown rows, totals, and advisory warnings.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::GrantFigures;

/// The outcome of processing a single grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantStatus {
    /// The grant was indexed and entered the aggregate totals.
    Computed,
    /// The grant was skipped before indexation: amount or a work date missing.
    MissingData,
    /// The index calculator was unavailable; the grant is excluded.
    IndexationUnavailable,
}

/// A single per-grant row in a summary, for tabular display by the
/// reporting collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantBreakdown {
    /// The id of the grant.
    pub grant_id: i64,
    /// The employer that paid the grant.
    pub employer_name: String,
    /// The nominal grant amount (zero when the amount was missing).
    pub nominal_amount: Decimal,
    /// How processing of this grant ended.
    pub status: GrantStatus,
    /// The derived figures (zeroed unless the status is `Computed`).
    pub figures: GrantFigures,
}

/// An advisory warning attached to a summary.
///
/// Warnings indicate degraded results that do not prevent the summary from
/// being computed but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete result of an exemption summary computation.
///
/// This is an ephemeral record: it is returned to the caller and handed to
/// the reporting collaborator, never persisted by the engine itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExemptionSummary {
    /// Unique identifier for this computation.
    pub summary_id: Uuid,
    /// When the computation was performed.
    pub computed_at: DateTime<Utc>,
    /// The version of the engine that performed the computation.
    pub engine_version: String,
    /// The id of the client the summary is for.
    pub client_id: i64,
    /// The client's display name.
    pub client_name: String,
    /// The eligibility date the computation was anchored to.
    pub eligibility_date: NaiveDate,
    /// The lifetime exemption capital for the eligibility year.
    pub exempt_capital: Decimal,
    /// Sum of nominal amounts over all grants with complete data.
    pub grants_nominal: Decimal,
    /// Sum of fully indexed amounts over valid grants.
    pub grants_indexed_full: Decimal,
    /// Sum of window-limited indexed amounts over valid grants.
    pub grants_indexed_limited: Decimal,
    /// The total reduction of exemption capital caused by grants.
    pub grants_impact: Decimal,
    /// The client's reserved future grant amount (zero when unset).
    pub reserved_grant_nominal: Decimal,
    /// The reduction of exemption capital caused by the reserved grant.
    pub reserved_grant_impact: Decimal,
    /// Sum of commutation amounts flagged for inclusion.
    pub commutations_total: Decimal,
    /// Exemption capital remaining after all deductions (may be negative).
    pub remaining_capital: Decimal,
    /// The statutory monthly pension cap for the eligibility year.
    pub monthly_cap: Decimal,
    /// The monthly tax-exempt pension amount.
    pub pension_exempt: Decimal,
    /// The exempt amount as a percentage of the monthly cap, rounded to 2 dp.
    pub pension_rate: Decimal,
    /// Number of grants that entered the aggregate totals.
    pub grants_considered: u32,
    /// Number of grants skipped (missing data or indexation unavailable).
    pub grants_skipped: u32,
    /// Number of commutations included in the total.
    pub commutations_considered: u32,
    /// Per-grant breakdown rows for tabular display.
    pub grants: Vec<GrantBreakdown>,
    /// Advisory warnings attached to this summary.
    pub warnings: Vec<SummaryWarning>,
}
