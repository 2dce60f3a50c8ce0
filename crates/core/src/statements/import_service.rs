use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use super::import_model::ImportSummary;
use super::statement_parser::{parse_holdings_statement, parse_transactions_statement};
use crate::errors::Result;
use crate::holdings::HoldingRepositoryTrait;
use crate::transactions::TransactionRepositoryTrait;

/// Trait defining the contract for statement import operations.
#[async_trait]
pub trait StatementImportServiceTrait: Send + Sync {
    /// Parses a holdings statement and upserts every row by (folio, scheme).
    async fn import_holdings(&self, content: &[u8]) -> Result<ImportSummary>;

    /// Parses a transaction statement and upserts every row by transaction
    /// number. Re-importing the same statement leaves storage unchanged.
    async fn import_transactions(&self, content: &[u8]) -> Result<ImportSummary>;
}

pub struct StatementImportService {
    holding_repository: Arc<dyn HoldingRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl StatementImportService {
    pub fn new(
        holding_repository: Arc<dyn HoldingRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        Self {
            holding_repository,
            transaction_repository,
        }
    }
}

#[async_trait]
impl StatementImportServiceTrait for StatementImportService {
    async fn import_holdings(&self, content: &[u8]) -> Result<ImportSummary> {
        let holdings = parse_holdings_statement(content)?;
        let rows_read = holdings.len();
        let rows_upserted = self.holding_repository.upsert_holdings(holdings).await?;
        info!(
            "Imported holdings statement: {} rows read, {} upserted",
            rows_read, rows_upserted
        );
        Ok(ImportSummary {
            rows_read,
            rows_upserted,
        })
    }

    async fn import_transactions(&self, content: &[u8]) -> Result<ImportSummary> {
        let transactions = parse_transactions_statement(content)?;
        let rows_read = transactions.len();
        let rows_upserted = self
            .transaction_repository
            .upsert_transactions(transactions)
            .await?;
        info!(
            "Imported transaction statement: {} rows read, {} upserted",
            rows_read, rows_upserted
        );
        Ok(ImportSummary {
            rows_read,
            rows_upserted,
        })
    }
}
