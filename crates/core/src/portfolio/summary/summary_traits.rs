use super::summary_model::{PortfolioSummaryRecord, PortfolioSummaryResult};
use crate::errors::Result;
use crate::holdings::HoldingFilter;

/// Trait defining the contract for portfolio summary queries.
pub trait PortfolioSummaryServiceTrait: Send + Sync {
    /// Summary records for every holding of `investor_id`, or of all
    /// investors when `None`.
    ///
    /// Holdings whose computation fails are skipped and logged. Only a
    /// failure to load holdings is returned as an error.
    fn get_portfolio_summary(&self, investor_id: Option<&str>)
        -> Result<Vec<PortfolioSummaryRecord>>;

    /// Same as [`get_portfolio_summary`](Self::get_portfolio_summary) with an
    /// arbitrary filter, reporting skipped holdings alongside the records.
    fn summarize(&self, filter: &HoldingFilter) -> Result<PortfolioSummaryResult>;
}
