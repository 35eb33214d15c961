//! Grant model and its derived figures.
//!
//! A grant is a historical severance payment. Its stored fields come from
//! the persistence collaborator; the derived [`GrantFigures`] are a display
//! cache written back after each summary computation and are always a pure
//! function of the stored fields plus the eligibility date in effect.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived figures for a grant, overwritten whole on every recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantFigures {
    /// The grant amount indexed to the eligibility date, rounded to 2 dp.
    pub indexed_full: Decimal,
    /// The fraction of the work period inside the trailing 32-year window,
    /// rounded to 4 dp.
    pub window_ratio: Decimal,
    /// The indexed amount limited by the window ratio, rounded to 2 dp.
    pub limited_indexed: Decimal,
    /// The reduction of exemption capital caused by this grant, rounded to 2 dp.
    pub impact_on_exemption: Decimal,
}

impl GrantFigures {
    /// Returns figures with every field set to zero.
    ///
    /// Used for grants excluded from the aggregate (missing data or an
    /// unavailable index calculator).
    pub fn zeroed() -> Self {
        Self {
            indexed_full: Decimal::ZERO,
            window_ratio: Decimal::ZERO,
            limited_indexed: Decimal::ZERO,
            impact_on_exemption: Decimal::ZERO,
        }
    }
}

/// Represents a historical severance grant belonging to a client.
///
/// The date and amount fields are optional because the surrounding CRUD
/// layer allows partially-entered records; a grant only participates in a
/// summary once its amount and both work dates are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grant {
    /// Unique identifier for the grant.
    pub id: i64,
    /// The id of the client this grant belongs to.
    pub client_id: i64,
    /// The name of the employer that paid the grant.
    pub employer_name: String,
    /// The first day of the work period the grant covers.
    pub work_start_date: Option<NaiveDate>,
    /// The last day of the work period the grant covers.
    pub work_end_date: Option<NaiveDate>,
    /// The nominal grant amount.
    pub grant_amount: Option<Decimal>,
    /// The date the grant was paid.
    pub grant_date: Option<NaiveDate>,
    /// Cached derived figures from the last summary computation.
    #[serde(default)]
    pub figures: Option<GrantFigures>,
}

impl Grant {
    /// Returns the amount and work dates when all three are present.
    ///
    /// This is the completeness predicate grant processing runs on: a
    /// grant only participates in a summary when this returns `Some`.
    pub fn complete_data(&self) -> Option<(Decimal, NaiveDate, NaiveDate)> {
        match (self.grant_amount, self.work_start_date, self.work_end_date) {
            (Some(amount), Some(start), Some(end)) => Some((amount, start, end)),
            _ => None,
        }
    }

    /// Returns true if the grant has the amount and both work dates needed
    /// to participate in a summary computation.
    pub fn has_complete_data(&self) -> bool {
        self.complete_data().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_grant() -> Grant {
        Grant {
            id: 10,
            client_id: 1,
            employer_name: "First Employer Ltd".to_string(),
            work_start_date: NaiveDate::from_ymd_opt(1995, 1, 1),
            work_end_date: NaiveDate::from_ymd_opt(2010, 12, 31),
            grant_amount: Some(dec("100000")),
            grant_date: NaiveDate::from_ymd_opt(2011, 1, 15),
            figures: None,
        }
    }

    #[test]
    fn test_complete_grant_has_complete_data() {
        assert!(create_test_grant().has_complete_data());
    }

    #[test]
    fn test_complete_data_returns_the_fields() {
        let grant = create_test_grant();
        assert_eq!(
            grant.complete_data(),
            Some((
                dec("100000"),
                NaiveDate::from_ymd_opt(1995, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2010, 12, 31).unwrap(),
            ))
        );

        let mut grant = create_test_grant();
        grant.work_end_date = None;
        assert_eq!(grant.complete_data(), None);
    }

    #[test]
    fn test_grant_missing_amount_is_incomplete() {
        let mut grant = create_test_grant();
        grant.grant_amount = None;
        assert!(!grant.has_complete_data());
    }

    #[test]
    fn test_grant_missing_work_start_is_incomplete() {
        let mut grant = create_test_grant();
        grant.work_start_date = None;
        assert!(!grant.has_complete_data());
    }

    #[test]
    fn test_grant_missing_work_end_is_incomplete() {
        let mut grant = create_test_grant();
        grant.work_end_date = None;
        assert!(!grant.has_complete_data());
    }

    #[test]
    fn test_zeroed_figures_are_all_zero() {
        let figures = GrantFigures::zeroed();
        assert_eq!(figures.indexed_full, Decimal::ZERO);
        assert_eq!(figures.window_ratio, Decimal::ZERO);
        assert_eq!(figures.limited_indexed, Decimal::ZERO);
        assert_eq!(figures.impact_on_exemption, Decimal::ZERO);
    }

    #[test]
    fn test_grant_serialization_round_trip() {
        let mut grant = create_test_grant();
        grant.figures = Some(GrantFigures {
            indexed_full: dec("165000.00"),
            window_ratio: dec("0.8531"),
            limited_indexed: dec("140761.50"),
            impact_on_exemption: dec("190028.03"),
        });

        let json = serde_json::to_string(&grant).unwrap();
        let deserialized: Grant = serde_json::from_str(&json).unwrap();
        assert_eq!(grant, deserialized);
    }

    #[test]
    fn test_grant_deserializes_without_figures() {
        let json = r#"{
            "id": 10,
            "client_id": 1,
            "employer_name": "First Employer Ltd",
            "work_start_date": "1995-01-01",
            "work_end_date": "2010-12-31",
            "grant_amount": "100000",
            "grant_date": "2011-01-15"
        }"#;

        let grant: Grant = serde_json::from_str(json).unwrap();
        assert!(grant.figures.is_none());
        assert!(grant.has_complete_data());
    }
}
