//! HTTP client for the CBS consumer-price-index calculator.
//!
//! The calculator is queried with a nominal amount and two dates and
//! responds with the inflation-adjusted value. Requests are synchronous
//! with a bounded per-call timeout and are never retried.

use std::time::Duration;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{IndexationError, IndexationProvider};

/// The CBS consumer-price-index calculator endpoint.
pub const CBS_CALCULATOR_URL: &str = "https://api.cbs.gov.il/index/data/calculator/120010";

/// Bounded wait for a single calculator request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The `answer` object of a calculator response.
#[derive(Debug, Deserialize)]
struct CalculatorAnswer {
    to_value: Option<Decimal>,
}

/// The top-level calculator response shape.
#[derive(Debug, Deserialize)]
struct CalculatorResponse {
    answer: Option<CalculatorAnswer>,
}

/// A blocking client for the CBS price-index calculator.
///
/// Each lookup issues a single GET request with a 10-second timeout.
/// Every failure mode (transport error, non-success status, missing value
/// field) maps to a typed [`IndexationError`] and is logged; the caller
/// decides what the unavailable lookup means for its aggregate.
///
/// # Example
///
/// ```no_run
/// use exemption_engine::indexation::{CbsIndexClient, IndexationProvider};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let client = CbsIndexClient::new();
/// let indexed = client.index_amount(
///     Decimal::from(100000),
///     NaiveDate::from_ymd_opt(2010, 12, 31).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 2, 1),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CbsIndexClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl CbsIndexClient {
    /// Creates a client against the production calculator endpoint.
    pub fn new() -> Self {
        Self::with_base_url(CBS_CALCULATOR_URL)
    }

    /// Creates a client against a custom endpoint.
    ///
    /// Intended for tests and staging environments.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for CbsIndexClient {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexationProvider for CbsIndexClient {
    fn index_amount(
        &self,
        amount: Decimal,
        from_date: NaiveDate,
        to_date: Option<NaiveDate>,
    ) -> Result<Decimal, IndexationError> {
        let target_date = to_date.unwrap_or_else(|| Utc::now().date_naive());

        let response = self
            .http
            .get(&self.base_url)
            .timeout(REQUEST_TIMEOUT)
            .query(&[
                ("value", amount.to_string()),
                ("date", from_date.to_string()),
                ("toDate", target_date.to_string()),
                ("format", "json".to_string()),
                ("download", "false".to_string()),
            ])
            .send()
            .map_err(|e| {
                warn!(%from_date, %target_date, error = %e, "index calculator request failed");
                IndexationError::Transport {
                    from_date,
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%from_date, %target_date, status = status.as_u16(), "index calculator returned non-success status");
            return Err(IndexationError::Status {
                status: status.as_u16(),
                from_date,
            });
        }

        let body: CalculatorResponse = response.json().map_err(|e| {
            warn!(%from_date, %target_date, error = %e, "index calculator response was not valid JSON");
            IndexationError::MalformedResponse { from_date }
        })?;

        let to_value = body
            .answer
            .and_then(|answer| answer.to_value)
            .ok_or_else(|| {
                warn!(%from_date, %target_date, "index calculator response missing answer.to_value");
                IndexationError::MalformedResponse { from_date }
            })?;

        let indexed = to_value.round_dp(2);
        debug!(%from_date, %target_date, %amount, %indexed, "indexed amount");
        Ok(indexed)
    }
}
