//! Exemption summary aggregation.
//!
//! This module orchestrates the whole computation for one client: it
//! resolves the eligibility date, looks up the cap table, processes every
//! grant, folds in commutations and the reserved grant, and emits the
//! final [`ExemptionSummary`].

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::{CapTable, capitalization_months};
use crate::error::{EngineError, EngineResult};
use crate::indexation::IndexationProvider;
use crate::models::{
    Client, ExemptionSummary, GrantBreakdown, GrantStatus, SummaryWarning,
};
use crate::store::ClientStore;

use super::{eligibility_date, grant_impact_multiplier, process_grant};

/// Computes exemption summaries for clients.
///
/// Borrows its three collaborators: the persistence seam, the price-index
/// provider, and the statutory cap table. One calculator instance can
/// serve many computations; each computation is synchronous and
/// request-scoped.
///
/// # Example
///
/// ```no_run
/// use exemption_engine::calculation::SummaryCalculator;
/// use exemption_engine::config::CapTable;
/// use exemption_engine::indexation::CbsIndexClient;
/// use exemption_engine::store::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// let indexation = CbsIndexClient::new();
/// let caps = CapTable::default();
/// let calculator = SummaryCalculator::new(&store, &indexation, &caps);
/// let summary = calculator.compute_summary(1, None)?;
/// println!("exempt pension: {}", summary.pension_exempt);
/// # Ok::<(), exemption_engine::error::EngineError>(())
/// ```
pub struct SummaryCalculator<'a> {
    store: &'a dyn ClientStore,
    indexation: &'a dyn IndexationProvider,
    caps: &'a CapTable,
}

impl<'a> SummaryCalculator<'a> {
    /// Creates a calculator over the given collaborators.
    pub fn new(
        store: &'a dyn ClientStore,
        indexation: &'a dyn IndexationProvider,
        caps: &'a CapTable,
    ) -> Self {
        Self {
            store,
            indexation,
            caps,
        }
    }

    /// Computes the exemption summary for a client.
    ///
    /// The eligibility date is the supplied override if any; otherwise it
    /// is derived from the client's birth date, gender, and earliest
    /// pension start date (falling back to the current date when the
    /// client has no pension yet).
    ///
    /// This operation is read-only with respect to the store. Soft
    /// failures (a grant with missing fields, an unavailable index
    /// calculator) degrade the affected grant and never abort; the only
    /// error is [`EngineError::ClientNotFound`].
    pub fn compute_summary(
        &self,
        client_id: i64,
        eligibility_override: Option<NaiveDate>,
    ) -> EngineResult<ExemptionSummary> {
        let client = self
            .store
            .client(client_id)
            .ok_or(EngineError::ClientNotFound { client_id })?;

        let eligibility = self.resolve_eligibility(&client, eligibility_override);
        let eligibility_year = eligibility.year();
        let exempt_capital = self.caps.exempt_capital(eligibility_year);
        let monthly_cap = self.caps.monthly_cap(eligibility_year);

        debug!(
            client_id,
            %eligibility,
            %exempt_capital,
            "computing exemption summary"
        );

        // Process grants.
        let grants = self.store.grants(client_id);
        let mut breakdown = Vec::with_capacity(grants.len());
        let mut grants_nominal = Decimal::ZERO;
        let mut grants_indexed_full = Decimal::ZERO;
        let mut grants_indexed_limited = Decimal::ZERO;
        let mut grants_considered = 0u32;
        let mut grants_skipped = 0u32;

        for grant in &grants {
            let computation = process_grant(grant, eligibility, self.indexation);

            match computation.status {
                GrantStatus::Computed => {
                    grants_nominal += grant.grant_amount.unwrap_or(Decimal::ZERO);
                    grants_indexed_full += computation.figures.indexed_full;
                    grants_indexed_limited += computation.figures.limited_indexed;
                    grants_considered += 1;
                }
                GrantStatus::IndexationUnavailable => {
                    // Excluded from indexed totals, but its nominal amount
                    // is still part of the client's grant history.
                    grants_nominal += grant.grant_amount.unwrap_or(Decimal::ZERO);
                    grants_skipped += 1;
                }
                GrantStatus::MissingData => {
                    grants_skipped += 1;
                }
            }

            breakdown.push(GrantBreakdown {
                grant_id: grant.id,
                employer_name: grant.employer_name.clone(),
                nominal_amount: grant.grant_amount.unwrap_or(Decimal::ZERO),
                status: computation.status,
                figures: computation.figures,
            });
        }

        // Commutations across all of the client's pensions.
        let mut commutations_total = Decimal::ZERO;
        let mut commutations_considered = 0u32;
        for pension in self.store.pensions(client_id) {
            for commutation in self.store.commutations(pension.id) {
                if commutation.include_calc {
                    commutations_total += commutation.amount;
                    commutations_considered += 1;
                }
            }
        }
        commutations_total = commutations_total.round_dp(2);

        // Deductions against the exemption capital.
        let grants_impact = (grants_indexed_limited * grant_impact_multiplier()).round_dp(2);
        let reserved_grant_nominal = client.reserved_grant_amount.unwrap_or(Decimal::ZERO);
        let reserved_grant_impact =
            (reserved_grant_nominal * grant_impact_multiplier()).round_dp(2);

        let remaining_capital =
            exempt_capital - grants_impact - commutations_total - reserved_grant_impact;

        let pension_exempt = if remaining_capital > Decimal::ZERO {
            (remaining_capital / capitalization_months()).round_dp(2)
        } else {
            Decimal::ZERO
        };

        let pension_rate = if monthly_cap > Decimal::ZERO {
            (pension_exempt / monthly_cap * Decimal::from(100)).round_dp(2)
        } else {
            Decimal::ZERO
        };

        let mut warnings = Vec::new();
        if grants_considered == 0 && !grants.is_empty() {
            warn!(client_id, "no grant produced valid figures");
            warnings.push(SummaryWarning {
                code: "all_grants_excluded".to_string(),
                message: format!(
                    "none of the {} grants could be computed; grant deductions are absent from this summary",
                    grants.len()
                ),
                severity: "high".to_string(),
            });
        }

        Ok(ExemptionSummary {
            summary_id: Uuid::new_v4(),
            computed_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            client_id,
            client_name: client.full_name(),
            eligibility_date: eligibility,
            exempt_capital,
            grants_nominal,
            grants_indexed_full,
            grants_indexed_limited,
            grants_impact,
            reserved_grant_nominal,
            reserved_grant_impact,
            commutations_total,
            remaining_capital,
            monthly_cap,
            pension_exempt,
            pension_rate,
            grants_considered,
            grants_skipped,
            commutations_considered,
            grants: breakdown,
            warnings,
        })
    }

    /// Computes the summary and writes each processed grant's figures back
    /// through the store as a display cache.
    ///
    /// Grants skipped for missing data are left untouched; excluded grants
    /// get zeroed figures so stale values never survive a recomputation.
    pub fn compute_and_persist(
        &self,
        client_id: i64,
        eligibility_override: Option<NaiveDate>,
    ) -> EngineResult<ExemptionSummary> {
        let summary = self.compute_summary(client_id, eligibility_override)?;

        for row in &summary.grants {
            if row.status != GrantStatus::MissingData {
                self.store.save_grant_figures(row.grant_id, &row.figures)?;
            }
        }

        Ok(summary)
    }

    fn resolve_eligibility(&self, client: &Client, over: Option<NaiveDate>) -> NaiveDate {
        if let Some(date) = over {
            return date;
        }

        let anchor = self
            .store
            .pensions(client.id)
            .into_iter()
            .map(|p| p.start_date)
            .min()
            .unwrap_or_else(|| Utc::now().date_naive());

        eligibility_date(client.birth_date, client.gender, anchor)
    }
}
