//! Exemption computation engine for the retiree capital-exemption scheme.
//!
//! This crate computes how much of a retiree's pension income is tax-exempt:
//! it aggregates historical severance grants and pension commutations, reduces
//! the statutory lifetime exemption capital by their inflation-adjusted impact,
//! and derives the resulting monthly tax-exempt pension amount and rate.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod indexation;
pub mod models;
pub mod store;
