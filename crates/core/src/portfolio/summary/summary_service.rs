//! Portfolio summary service implementation.

use log::{debug, warn};
use std::sync::Arc;

use super::summary_model::{
    CostBasisOptions, PortfolioSummaryRecord, PortfolioSummaryResult, SchemeMetrics,
    SummaryWarning,
};
use super::summary_traits::PortfolioSummaryServiceTrait;
use crate::errors::{CalculatorError, Result};
use crate::holdings::{Holding, HoldingFilter, HoldingKey, HoldingRepositoryTrait};
use crate::portfolio::aggregation::aggregate_flows;
use crate::portfolio::grouping::{partition_by_scheme, SchemePartition};
use crate::portfolio::lot_matching::match_lots;
use crate::portfolio::valuation::calculate_valuation;
use crate::transactions::{Transaction, TransactionRepositoryTrait};

/// Runs aggregation, lot matching and valuation over one sorted partition.
pub fn compute_scheme_metrics(
    holding: &Holding,
    partition: &SchemePartition,
    options: &CostBasisOptions,
) -> std::result::Result<SchemeMetrics, CalculatorError> {
    let key = HoldingKey::new(holding.folio_no.clone(), partition.scheme.clone());
    let flows = aggregate_flows(&key, &partition.transactions)?;
    let lots = match_lots(
        &key,
        &partition.transactions,
        flows.redeemed_units,
        options.adjustment_nav,
    )?;
    let valuation = calculate_valuation(holding, &flows, &lots)?;

    Ok(SchemeMetrics {
        flows,
        lots,
        valuation,
    })
}

/// Builds the summary records of one holding: one per scheme observed in
/// its transactions, or a single metric-less record when it has none.
pub fn summarize_holding(
    holding: &Holding,
    transactions: Vec<Transaction>,
    options: &CostBasisOptions,
) -> std::result::Result<Vec<PortfolioSummaryRecord>, CalculatorError> {
    if transactions.is_empty() {
        return Ok(vec![PortfolioSummaryRecord::without_transactions(
            holding.clone(),
        )]);
    }

    partition_by_scheme(transactions)
        .into_iter()
        .map(|partition| {
            let metrics = compute_scheme_metrics(holding, &partition, options)?;
            Ok(PortfolioSummaryRecord {
                holding: holding.clone(),
                transactions: partition.transactions,
                metrics: Some(metrics),
            })
        })
        .collect()
}

/// Service assembling cost-basis summaries from stored holdings and
/// transactions.
pub struct PortfolioSummaryService {
    holding_repository: Arc<dyn HoldingRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    options: CostBasisOptions,
}

impl PortfolioSummaryService {
    pub fn new(
        holding_repository: Arc<dyn HoldingRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        options: CostBasisOptions,
    ) -> Self {
        Self {
            holding_repository,
            transaction_repository,
            options,
        }
    }

    fn summarize_one(
        &self,
        holding: &Holding,
    ) -> std::result::Result<Vec<PortfolioSummaryRecord>, String> {
        let transactions = self
            .transaction_repository
            .transactions_for(&holding.folio_no, &holding.scheme)
            .map_err(|e| format!("Failed to load transactions: {}", e))?;
        if transactions.is_empty() {
            debug!("No transactions recorded for holding {}", holding.key());
        }
        summarize_holding(holding, transactions, &self.options).map_err(|e| e.to_string())
    }
}

impl PortfolioSummaryServiceTrait for PortfolioSummaryService {
    fn get_portfolio_summary(
        &self,
        investor_id: Option<&str>,
    ) -> Result<Vec<PortfolioSummaryRecord>> {
        let result = self.summarize(&HoldingFilter::for_investor(investor_id))?;
        Ok(result.records)
    }

    fn summarize(&self, filter: &HoldingFilter) -> Result<PortfolioSummaryResult> {
        let holdings = self.holding_repository.filter(filter)?;
        debug!(
            "Summarizing {} holdings (investor: {:?}, folio: {:?}, adjustment NAV: {})",
            holdings.len(),
            filter.investor_id,
            filter.folio_no,
            self.options.adjustment_nav
        );

        let mut result = PortfolioSummaryResult::default();
        for holding in &holdings {
            match self.summarize_one(holding) {
                Ok(records) => result.records.extend(records),
                Err(message) => {
                    warn!("Skipping holding {}: {}", holding.key(), message);
                    result
                        .warnings
                        .push(SummaryWarning::new(&holding.key(), message));
                }
            }
        }

        Ok(result)
    }
}
