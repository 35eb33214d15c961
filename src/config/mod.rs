//! Statutory cap-table configuration for the exemption computation engine.
//!
//! This module provides the annual exemption-cap table (monthly pension cap
//! and exemption percentage per eligibility year) together with a YAML
//! loader for updated statutory tables.
//!
//! # Example
//!
//! ```
//! use exemption_engine::config::CapTable;
//!
//! let caps = CapTable::default();
//! println!("2025 exempt capital: {}", caps.exempt_capital(2025));
//! ```

mod loader;
mod types;

pub use loader::CapTableLoader;
pub use types::{CapEntry, CapTable, capitalization_months};
