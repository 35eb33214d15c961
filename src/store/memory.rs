//! In-memory implementation of the persistence seam.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{EngineError, EngineResult};
use crate::models::{Client, Commutation, Grant, GrantFigures, Pension};

use super::ClientStore;

#[derive(Debug, Default)]
struct Records {
    clients: HashMap<i64, Client>,
    pensions: HashMap<i64, Pension>,
    grants: HashMap<i64, Grant>,
    commutations: HashMap<i64, Commutation>,
}

/// A [`ClientStore`] backed by in-process hash maps.
///
/// Used by the test suites and by small tools that do not sit on a
/// database. Interior mutability keeps the trait's `&self` signatures.
///
/// # Example
///
/// ```
/// use exemption_engine::models::{Client, Gender};
/// use exemption_engine::store::{ClientStore, InMemoryStore};
/// use chrono::NaiveDate;
///
/// let store = InMemoryStore::new();
/// store.insert_client(Client {
///     id: 1,
///     first_name: "Dana".to_string(),
///     last_name: "Levi".to_string(),
///     birth_date: NaiveDate::from_ymd_opt(1958, 4, 12).unwrap(),
///     gender: Gender::Female,
///     reserved_grant_amount: None,
/// });
/// assert!(store.client(1).is_some());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Mutex<Records>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a client.
    pub fn insert_client(&self, client: Client) {
        let mut records = self.records.lock().expect("store lock poisoned");
        records.clients.insert(client.id, client);
    }

    /// Inserts or replaces a pension.
    pub fn insert_pension(&self, pension: Pension) {
        let mut records = self.records.lock().expect("store lock poisoned");
        records.pensions.insert(pension.id, pension);
    }

    /// Inserts or replaces a grant.
    pub fn insert_grant(&self, grant: Grant) {
        let mut records = self.records.lock().expect("store lock poisoned");
        records.grants.insert(grant.id, grant);
    }

    /// Inserts or replaces a commutation.
    pub fn insert_commutation(&self, commutation: Commutation) {
        let mut records = self.records.lock().expect("store lock poisoned");
        records.commutations.insert(commutation.id, commutation);
    }

    /// Returns a grant by id, including any cached figures.
    pub fn grant(&self, grant_id: i64) -> Option<Grant> {
        let records = self.records.lock().expect("store lock poisoned");
        records.grants.get(&grant_id).cloned()
    }
}

impl ClientStore for InMemoryStore {
    fn client(&self, client_id: i64) -> Option<Client> {
        let records = self.records.lock().expect("store lock poisoned");
        records.clients.get(&client_id).cloned()
    }

    fn pensions(&self, client_id: i64) -> Vec<Pension> {
        let records = self.records.lock().expect("store lock poisoned");
        records
            .pensions
            .values()
            .filter(|p| p.client_id == client_id)
            .cloned()
            .collect()
    }

    fn grants(&self, client_id: i64) -> Vec<Grant> {
        let records = self.records.lock().expect("store lock poisoned");
        let mut grants: Vec<Grant> = records
            .grants
            .values()
            .filter(|g| g.client_id == client_id)
            .cloned()
            .collect();
        // Stable iteration order for reproducible breakdowns.
        grants.sort_by_key(|g| g.id);
        grants
    }

    fn commutations(&self, pension_id: i64) -> Vec<Commutation> {
        let records = self.records.lock().expect("store lock poisoned");
        records
            .commutations
            .values()
            .filter(|c| c.pension_id == pension_id)
            .cloned()
            .collect()
    }

    fn save_grant_figures(&self, grant_id: i64, figures: &GrantFigures) -> EngineResult<()> {
        let mut records = self.records.lock().expect("store lock poisoned");
        let grant = records
            .grants
            .get_mut(&grant_id)
            .ok_or(EngineError::GrantNotFound { grant_id })?;
        grant.figures = Some(figures.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn create_test_client(id: i64) -> Client {
        Client {
            id,
            first_name: "Dana".to_string(),
            last_name: "Levi".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1958, 4, 12).unwrap(),
            gender: Gender::Female,
            reserved_grant_amount: None,
        }
    }

    fn create_test_grant(id: i64, client_id: i64) -> Grant {
        Grant {
            id,
            client_id,
            employer_name: "Employer".to_string(),
            work_start_date: NaiveDate::from_ymd_opt(2000, 1, 1),
            work_end_date: NaiveDate::from_ymd_opt(2010, 12, 31),
            grant_amount: Some(Decimal::from(100000)),
            grant_date: NaiveDate::from_ymd_opt(2011, 1, 15),
            figures: None,
        }
    }

    #[test]
    fn test_missing_client_returns_none() {
        let store = InMemoryStore::new();
        assert!(store.client(404).is_none());
    }

    #[test]
    fn test_grants_filtered_by_client_and_sorted() {
        let store = InMemoryStore::new();
        store.insert_client(create_test_client(1));
        store.insert_grant(create_test_grant(12, 1));
        store.insert_grant(create_test_grant(10, 1));
        store.insert_grant(create_test_grant(11, 2));

        let grants = store.grants(1);
        let ids: Vec<i64> = grants.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![10, 12]);
    }

    #[test]
    fn test_save_grant_figures_overwrites_cache() {
        let store = InMemoryStore::new();
        store.insert_grant(create_test_grant(10, 1));

        let figures = GrantFigures {
            indexed_full: Decimal::new(16500000, 2),
            window_ratio: Decimal::new(10000, 4),
            limited_indexed: Decimal::new(16500000, 2),
            impact_on_exemption: Decimal::new(22275000, 2),
        };
        store.save_grant_figures(10, &figures).unwrap();

        assert_eq!(store.grant(10).unwrap().figures, Some(figures));
    }

    #[test]
    fn test_save_grant_figures_for_missing_grant_errors() {
        let store = InMemoryStore::new();
        let result = store.save_grant_figures(404, &GrantFigures::zeroed());
        assert!(matches!(
            result,
            Err(EngineError::GrantNotFound { grant_id: 404 })
        ));
    }
}
