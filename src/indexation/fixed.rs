//! Deterministic fixed-factor indexation.
//!
//! Multiplies every amount by one fixed factor regardless of dates. This is
//! the offline fallback the system shipped with before the calculator
//! integration (factor 1.65), and the stub that makes summary computations
//! deterministic in tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{IndexationError, IndexationProvider};

/// An [`IndexationProvider`] that applies one fixed multiplication factor.
///
/// # Example
///
/// ```
/// use exemption_engine::indexation::{FixedFactorIndexation, IndexationProvider};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let provider = FixedFactorIndexation::new(Decimal::new(165, 2));
/// let from = NaiveDate::from_ymd_opt(2010, 12, 31).unwrap();
/// let indexed = provider.index_amount(Decimal::from(1000), from, None).unwrap();
/// assert_eq!(indexed, Decimal::new(165000, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedFactorIndexation {
    factor: Decimal,
}

impl FixedFactorIndexation {
    /// Creates a provider that multiplies every amount by `factor`.
    pub fn new(factor: Decimal) -> Self {
        Self { factor }
    }

    /// Returns the fixed factor.
    pub fn factor(&self) -> Decimal {
        self.factor
    }
}

impl IndexationProvider for FixedFactorIndexation {
    fn index_amount(
        &self,
        amount: Decimal,
        _from_date: NaiveDate,
        _to_date: Option<NaiveDate>,
    ) -> Result<Decimal, IndexationError> {
        Ok((amount * self.factor).round_dp(2))
    }
}
