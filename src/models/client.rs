//! Client model and related types.
//!
//! This module defines the Client struct and Gender enum used to derive
//! the statutory retirement date for eligibility calculations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a client's gender for retirement-age purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Statutory retirement age of 67.
    Male,
    /// Statutory retirement age of 62.
    Female,
}

impl Gender {
    /// Returns the statutory retirement age in whole years.
    ///
    /// # Examples
    ///
    /// ```
    /// use exemption_engine::models::Gender;
    ///
    /// assert_eq!(Gender::Male.retirement_age_years(), 67);
    /// assert_eq!(Gender::Female.retirement_age_years(), 62);
    /// ```
    pub fn retirement_age_years(self) -> i32 {
        match self {
            Gender::Male => 67,
            Gender::Female => 62,
        }
    }
}

/// Represents a retiree whose exemption capital is being computed.
///
/// Owned by the persistence collaborator; the engine reads the stable
/// fields and never mutates a client record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier for the client.
    pub id: i64,
    /// The client's first name (display only).
    pub first_name: String,
    /// The client's last name (display only).
    pub last_name: String,
    /// The client's date of birth.
    pub birth_date: NaiveDate,
    /// The client's gender, which determines the statutory retirement age.
    pub gender: Gender,
    /// Nominal value of an anticipated future grant, pre-emptively
    /// reserved against the exemption capital.
    #[serde(default)]
    pub reserved_grant_amount: Option<Decimal>,
}

impl Client {
    /// Returns the client's full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_client() -> Client {
        Client {
            id: 1,
            first_name: "Dana".to_string(),
            last_name: "Levi".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1958, 4, 12).unwrap(),
            gender: Gender::Female,
            reserved_grant_amount: None,
        }
    }

    #[test]
    fn test_deserialize_client() {
        let json = r#"{
            "id": 1,
            "first_name": "Dana",
            "last_name": "Levi",
            "birth_date": "1958-04-12",
            "gender": "female"
        }"#;

        let client: Client = serde_json::from_str(json).unwrap();
        assert_eq!(client.id, 1);
        assert_eq!(client.gender, Gender::Female);
        assert_eq!(
            client.birth_date,
            NaiveDate::from_ymd_opt(1958, 4, 12).unwrap()
        );
        assert_eq!(client.reserved_grant_amount, None);
    }

    #[test]
    fn test_deserialize_client_with_reserved_grant() {
        let json = r#"{
            "id": 2,
            "first_name": "Yossi",
            "last_name": "Cohen",
            "birth_date": "1955-11-30",
            "gender": "male",
            "reserved_grant_amount": "50000.00"
        }"#;

        let client: Client = serde_json::from_str(json).unwrap();
        assert_eq!(client.reserved_grant_amount, Some(Decimal::new(5000000, 2)));
    }

    #[test]
    fn test_serialize_client_round_trip() {
        let client = create_test_client();
        let json = serde_json::to_string(&client).unwrap();
        let deserialized: Client = serde_json::from_str(&json).unwrap();
        assert_eq!(client, deserialized);
    }

    #[test]
    fn test_gender_serialization() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
        assert_eq!(
            serde_json::to_string(&Gender::Female).unwrap(),
            "\"female\""
        );
    }

    #[test]
    fn test_full_name() {
        let client = create_test_client();
        assert_eq!(client.full_name(), "Dana Levi");
    }
}
