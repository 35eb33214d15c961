//! Price-index ("indexation") services.
//!
//! Indexation converts a nominal historical amount into its
//! inflation-adjusted value at a target date, via an external
//! consumer-price-index calculator. The engine treats the calculator as an
//! impure dependency: every call may fail independently, failures are never
//! retried, and a failed call degrades only the grant that needed it.
//!
//! The [`IndexationProvider`] trait is the seam: the production
//! implementation is [`CbsIndexClient`], optionally wrapped in
//! [`CachedIndexation`]; [`FixedFactorIndexation`] is a deterministic stub
//! for tests and offline runs.

mod cache;
mod cbs;
mod fixed;

pub use cache::CachedIndexation;
pub use cbs::{CBS_CALCULATOR_URL, CbsIndexClient};
pub use fixed::FixedFactorIndexation;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from the external price-index calculator.
///
/// All variants mean "unavailable" to grant processing; they are typed so
/// callers can tell a transport failure from a malformed response.
#[derive(Debug, Clone, Error)]
pub enum IndexationError {
    /// The request failed at the transport level (network error, timeout).
    #[error("index calculator request failed for {from_date}: {message}")]
    Transport {
        /// The reference date of the failed lookup.
        from_date: NaiveDate,
        /// A description of the transport failure.
        message: String,
    },

    /// The calculator responded with a non-success HTTP status.
    #[error("index calculator returned status {status} for {from_date}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The reference date of the failed lookup.
        from_date: NaiveDate,
    },

    /// The response body did not contain the expected adjusted value.
    #[error("index calculator response missing adjusted value for {from_date}")]
    MalformedResponse {
        /// The reference date of the failed lookup.
        from_date: NaiveDate,
    },
}

/// A source of inflation-adjusted amounts.
///
/// `index_amount` converts `amount`, anchored at `from_date`, into its
/// value at `to_date` (or at the current date when `to_date` is `None`),
/// rounded to 2 decimal places.
pub trait IndexationProvider: Send + Sync {
    /// Returns the inflation-adjusted value of `amount` between the two
    /// dates, rounded to 2 decimal places.
    fn index_amount(
        &self,
        amount: Decimal,
        from_date: NaiveDate,
        to_date: Option<NaiveDate>,
    ) -> Result<Decimal, IndexationError>;
}
