//! Invested and redeemed totals over one scheme's transactions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::CalculatorError;
use crate::holdings::HoldingKey;
use crate::transactions::{Transaction, TransactionDirection};

/// Cash and unit flows summed by direction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FlowTotals {
    /// Sum of `amount` over accumulating transactions.
    pub invested_amount: Decimal,
    /// Sum of `units` over consuming transactions.
    pub redeemed_units: Decimal,
    /// Sum of `amount` over consuming transactions.
    pub redeemed_amount: Decimal,
}

fn checked_add(
    total: Decimal,
    delta: Decimal,
    key: &HoldingKey,
    field: &'static str,
) -> Result<Decimal, CalculatorError> {
    total
        .checked_add(delta)
        .ok_or_else(|| CalculatorError::Overflow {
            folio_no: key.folio_no.clone(),
            scheme: key.scheme.clone(),
            field,
        })
}

/// Folds a transaction set into its flow totals.
///
/// Null `amount` or `units` contribute zero to the affected field.
/// Unclassified transactions contribute nothing.
pub fn aggregate_flows(
    key: &HoldingKey,
    transactions: &[Transaction],
) -> Result<FlowTotals, CalculatorError> {
    transactions
        .iter()
        .try_fold(FlowTotals::default(), |totals, txn| match txn.direction() {
            TransactionDirection::Accumulating => Ok(FlowTotals {
                invested_amount: checked_add(
                    totals.invested_amount,
                    txn.amount_or_zero(),
                    key,
                    "invested_amount",
                )?,
                ..totals
            }),
            TransactionDirection::Consuming => Ok(FlowTotals {
                redeemed_units: checked_add(
                    totals.redeemed_units,
                    txn.units_or_zero(),
                    key,
                    "redeemed_units",
                )?,
                redeemed_amount: checked_add(
                    totals.redeemed_amount,
                    txn.amount_or_zero(),
                    key,
                    "redeemed_amount",
                )?,
                ..totals
            }),
            TransactionDirection::Unclassified => Ok(totals),
        })
}
