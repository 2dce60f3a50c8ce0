//! Portfolio summary: per-scheme cost basis and gain/loss for an investor's
//! holdings.

mod summary_model;
mod summary_service;
mod summary_traits;

pub use summary_model::*;
pub use summary_service::*;
pub use summary_traits::*;
