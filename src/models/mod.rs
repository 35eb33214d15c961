//! Core data models for the exemption computation engine.
//!
//! This module contains the domain records consumed from the persistence
//! collaborator and the summary types produced for reporting.

mod client;
mod grant;
mod pension;
mod summary;

pub use client::{Client, Gender};
pub use grant::{Grant, GrantFigures};
pub use pension::{Commutation, CommutationKind, Pension};
pub use summary::{ExemptionSummary, GrantBreakdown, GrantStatus, SummaryWarning};
