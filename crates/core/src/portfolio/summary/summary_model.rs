//! Portfolio summary models.

use serde::{Deserialize, Serialize};

use crate::holdings::{Holding, HoldingKey};
use crate::portfolio::aggregation::FlowTotals;
use crate::portfolio::lot_matching::{AdjustmentNavPolicy, LotMatchResult};
use crate::portfolio::valuation::ValuationMetrics;
use crate::transactions::Transaction;

/// Engine settings fixed at service construction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CostBasisOptions {
    pub adjustment_nav: AdjustmentNavPolicy,
}

/// Everything derived for one scheme partition. Not persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SchemeMetrics {
    #[serde(flatten)]
    pub flows: FlowTotals,
    #[serde(flatten)]
    pub lots: LotMatchResult,
    #[serde(flatten)]
    pub valuation: ValuationMetrics,
}

/// A holding's fields merged with one scheme partition's transactions and
/// metrics.
///
/// `metrics` is absent for holdings that have no transactions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummaryRecord {
    #[serde(flatten)]
    pub holding: Holding,
    pub transactions: Vec<Transaction>,
    #[serde(flatten)]
    pub metrics: Option<SchemeMetrics>,
}

impl PortfolioSummaryRecord {
    pub fn without_transactions(holding: Holding) -> Self {
        Self {
            holding,
            transactions: Vec::new(),
            metrics: None,
        }
    }
}

/// A holding that was left out of the summary, and why.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryWarning {
    pub folio_no: String,
    pub scheme: String,
    pub message: String,
}

impl SummaryWarning {
    pub fn new(key: &HoldingKey, message: impl Into<String>) -> Self {
        Self {
            folio_no: key.folio_no.clone(),
            scheme: key.scheme.clone(),
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummaryResult {
    pub records: Vec<PortfolioSummaryRecord>,
    pub warnings: Vec<SummaryWarning>,
}
