//! Persistence seam for the exemption computation engine.
//!
//! The engine never owns client data: it reads records through the
//! [`ClientStore`] trait and writes back only the cached per-grant figures.
//! The surrounding CRUD layer implements this trait over its database; the
//! bundled [`InMemoryStore`] backs tests and small tools.

mod memory;

pub use memory::InMemoryStore;

use crate::error::EngineResult;
use crate::models::{Client, Commutation, Grant, GrantFigures, Pension};

/// Read access to a client's records plus the one write the engine
/// performs: caching derived grant figures.
pub trait ClientStore {
    /// Returns the client with the given id, if any.
    fn client(&self, client_id: i64) -> Option<Client>;

    /// Returns all pensions belonging to the client, in no particular order.
    fn pensions(&self, client_id: i64) -> Vec<Pension>;

    /// Returns all grants belonging to the client, in no particular order.
    fn grants(&self, client_id: i64) -> Vec<Grant>;

    /// Returns all commutations belonging to the pension.
    fn commutations(&self, pension_id: i64) -> Vec<Commutation>;

    /// Overwrites the cached derived figures of a grant.
    ///
    /// Returns [`crate::error::EngineError::GrantNotFound`] if the grant no
    /// longer exists.
    fn save_grant_figures(&self, grant_id: i64, figures: &GrantFigures) -> EngineResult<()>;
}
