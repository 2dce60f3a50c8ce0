//! FIFO cost-basis walk.
//!
//! Lots are never paired with individual redemptions. The walk accumulates
//! purchased units oldest-first until the running total reaches or crosses
//! the scheme's total redeemed units; the cost of everything walked over is
//! the cost consumed by redemptions. When the crossing lot was only partly
//! redeemed, the unconsumed remainder is priced and handed back to the
//! position.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CalculatorError;
use crate::holdings::HoldingKey;
use crate::transactions::{Transaction, TransactionDirection};

/// Which NAV prices the unconsumed remainder of a partially redeemed lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdjustmentNavPolicy {
    /// Overshoot is noticed on the record after the crossing lot and the
    /// remainder is priced at that record's NAV. A crossing lot that is the
    /// last record is never adjusted. Downstream reports depend on these
    /// numbers, so this stays the default.
    #[default]
    TriggeringRecord,
    /// Overshoot is noticed on the crossing lot itself and the remainder is
    /// priced at that lot's NAV.
    SplitLot,
}

impl AdjustmentNavPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustmentNavPolicy::TriggeringRecord => "triggering-record",
            AdjustmentNavPolicy::SplitLot => "split-lot",
        }
    }
}

impl fmt::Display for AdjustmentNavPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdjustmentNavPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "triggering-record" | "triggering_record" | "legacy" => {
                Ok(AdjustmentNavPolicy::TriggeringRecord)
            }
            "split-lot" | "split_lot" | "corrected" => Ok(AdjustmentNavPolicy::SplitLot),
            other => Err(format!("Unknown adjustment NAV policy: {}", other)),
        }
    }
}

/// Outcome of the FIFO walk for one scheme.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LotMatchResult {
    /// Units walked over before the walk stopped.
    pub sold_units: Decimal,
    /// Cost basis consumed by redemptions.
    pub total_cost: Decimal,
    /// Unconsumed remainder of the crossing lot (zero when no overshoot).
    pub adjusted_units: Decimal,
    /// `adjusted_units * adjusted_nav`, returned to the position.
    pub adjusted_amount: Decimal,
    pub adjusted_nav: Decimal,
}

impl LotMatchResult {
    pub fn was_adjusted(&self) -> bool {
        !self.adjusted_units.is_zero()
    }
}

struct LotWalk<'a> {
    key: &'a HoldingKey,
    state: LotMatchResult,
}

impl<'a> LotWalk<'a> {
    fn overflow(&self, field: &'static str) -> CalculatorError {
        CalculatorError::Overflow {
            folio_no: self.key.folio_no.clone(),
            scheme: self.key.scheme.clone(),
            field,
        }
    }

    fn add_lot(&mut self, units: Decimal, nav: Decimal) -> Result<(), CalculatorError> {
        let cost = units
            .checked_mul(nav)
            .ok_or_else(|| self.overflow("total_cost"))?;
        self.state.sold_units = self
            .state
            .sold_units
            .checked_add(units)
            .ok_or_else(|| self.overflow("sold_units"))?;
        self.state.total_cost = self
            .state
            .total_cost
            .checked_add(cost)
            .ok_or_else(|| self.overflow("total_cost"))?;
        Ok(())
    }

    fn adjust(&mut self, redeemed_units: Decimal, nav: Decimal) -> Result<(), CalculatorError> {
        let adjusted_units = self
            .state
            .sold_units
            .checked_sub(redeemed_units)
            .ok_or_else(|| self.overflow("adjusted_units"))?;
        let adjusted_amount = adjusted_units
            .checked_mul(nav)
            .ok_or_else(|| self.overflow("adjusted_amount"))?;
        self.state.total_cost = self
            .state
            .total_cost
            .checked_sub(adjusted_amount)
            .ok_or_else(|| self.overflow("total_cost"))?;
        self.state.adjusted_units = adjusted_units;
        self.state.adjusted_amount = adjusted_amount;
        self.state.adjusted_nav = nav;
        Ok(())
    }
}

/// Walks `transactions` oldest-first against the scheme's total redeemed units.
///
/// `transactions` must already be scoped to one (folio, scheme) and sorted
/// chronologically. The walk stops when the walked units equal the redeemed
/// units, or at the first record with no units.
pub fn match_lots(
    key: &HoldingKey,
    transactions: &[Transaction],
    redeemed_units: Decimal,
    policy: AdjustmentNavPolicy,
) -> Result<LotMatchResult, CalculatorError> {
    let mut walk = LotWalk {
        key,
        state: LotMatchResult::default(),
    };

    for txn in transactions {
        let Some(units) = txn.units else {
            break;
        };
        if walk.state.sold_units == redeemed_units {
            break;
        }

        match policy {
            AdjustmentNavPolicy::TriggeringRecord => {
                if walk.state.sold_units > redeemed_units {
                    walk.adjust(redeemed_units, txn.nav_or_zero())?;
                    break;
                }
                if txn.direction() == TransactionDirection::Accumulating {
                    walk.add_lot(units, txn.nav_or_zero())?;
                }
            }
            AdjustmentNavPolicy::SplitLot => {
                if txn.direction() == TransactionDirection::Accumulating {
                    walk.add_lot(units, txn.nav_or_zero())?;
                    if walk.state.sold_units > redeemed_units {
                        walk.adjust(redeemed_units, txn.nav_or_zero())?;
                        break;
                    }
                }
            }
        }
    }

    Ok(walk.state)
}
