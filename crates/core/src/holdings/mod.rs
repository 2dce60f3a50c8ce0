//! Holdings module - registrar holding records and their repository contract.

mod holdings_model;
mod holdings_traits;

pub use holdings_model::{Holding, HoldingFilter, HoldingKey};
pub use holdings_traits::HoldingRepositoryTrait;
