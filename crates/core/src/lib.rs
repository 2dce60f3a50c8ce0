//! Navfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the cost-basis engine for mutual-fund statements:
//! transaction classification, flow aggregation, FIFO lot matching,
//! valuation, and the per-scheme portfolio summary. It is database-agnostic
//! and defines traits that are implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod holdings;
pub mod portfolio;
pub mod statements;
pub mod transactions;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
