use super::transactions_model::Transaction;
use crate::Result;
use async_trait::async_trait;

/// Trait defining the contract for Transaction repository operations.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Loads every transaction booked against exactly this (folio, scheme).
    /// No ordering is guaranteed.
    fn transactions_for(&self, folio_no: &str, scheme: &str) -> Result<Vec<Transaction>>;

    /// Inserts or updates transactions by transaction number.
    /// Returns the number of rows written.
    async fn upsert_transactions(&self, transactions: Vec<Transaction>) -> Result<usize>;
}
