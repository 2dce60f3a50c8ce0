use super::holdings_model::{Holding, HoldingFilter};
use crate::Result;
use async_trait::async_trait;

/// Trait defining the contract for Holding repository operations.
#[async_trait]
pub trait HoldingRepositoryTrait: Send + Sync {
    /// Loads holdings matching the filter, ordered by folio then scheme.
    fn filter(&self, filter: &HoldingFilter) -> Result<Vec<Holding>>;

    /// Inserts or updates holdings by (folio, scheme).
    /// Returns the number of rows written.
    async fn upsert_holdings(&self, holdings: Vec<Holding>) -> Result<usize>;
}
