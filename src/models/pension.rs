//! Pension and commutation models.
//!
//! A pension belongs to a client; the earliest pension by start date anchors
//! the eligibility calculation. Commutations are lump sums taken in lieu of
//! part of a pension annuity and belong to a pension.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a pension annuity belonging to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pension {
    /// Unique identifier for the pension.
    pub id: i64,
    /// The id of the client this pension belongs to.
    pub client_id: i64,
    /// The name of the paying fund or insurer (display only).
    pub payer_name: String,
    /// The date pension payments started.
    pub start_date: NaiveDate,
}

/// Whether a commutation replaced the whole annuity or part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommutationKind {
    /// The entire annuity was commuted.
    Full,
    /// Only part of the annuity was commuted.
    Partial,
}

/// Represents a lump-sum commutation taken against a pension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commutation {
    /// Unique identifier for the commutation.
    pub id: i64,
    /// The id of the pension this commutation belongs to.
    pub pension_id: i64,
    /// The commuted amount.
    pub amount: Decimal,
    /// The date the commutation was taken.
    pub date: NaiveDate,
    /// Whether the commutation was full or partial.
    pub kind: CommutationKind,
    /// Only commutations flagged for inclusion reduce the exemption capital.
    pub include_calc: bool,
}
