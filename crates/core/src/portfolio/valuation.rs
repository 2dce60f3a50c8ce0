//! Gain/loss and return figures for one scheme partition.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::PERCENT_MULTIPLIER;
use crate::errors::CalculatorError;
use crate::holdings::{Holding, HoldingKey};
use crate::portfolio::aggregation::FlowTotals;
use crate::portfolio::lot_matching::LotMatchResult;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ValuationMetrics {
    /// `current_value / closing_units`.
    pub current_nav: Decimal,
    /// Cost basis still held: invested amount minus consumed cost.
    pub investment_left: Decimal,
    pub unrealized_gain_loss: Decimal,
    pub unrealized_gain_loss_percent: Decimal,
    pub realized_gain_loss: Decimal,
    pub realized_gain_loss_percent: Decimal,
    pub absolute_return_percent: Decimal,
}

struct Guard<'a> {
    key: &'a HoldingKey,
}

impl Guard<'_> {
    fn overflow(&self, field: &'static str) -> CalculatorError {
        CalculatorError::Overflow {
            folio_no: self.key.folio_no.clone(),
            scheme: self.key.scheme.clone(),
            field,
        }
    }

    fn sub(
        &self,
        a: Decimal,
        b: Decimal,
        field: &'static str,
    ) -> Result<Decimal, CalculatorError> {
        a.checked_sub(b).ok_or_else(|| self.overflow(field))
    }

    /// Zero denominators yield zero.
    fn ratio(
        &self,
        num: Decimal,
        den: Decimal,
        field: &'static str,
    ) -> Result<Decimal, CalculatorError> {
        if den.is_zero() {
            return Ok(Decimal::ZERO);
        }
        num.checked_div(den).ok_or_else(|| self.overflow(field))
    }

    fn percent(
        &self,
        num: Decimal,
        den: Decimal,
        field: &'static str,
    ) -> Result<Decimal, CalculatorError> {
        self.ratio(num, den, field)?
            .checked_mul(Decimal::from(PERCENT_MULTIPLIER))
            .ok_or_else(|| self.overflow(field))
    }
}

/// Derives valuation figures from the holding's reported position and the
/// partition's flow totals and lot-matching result.
///
/// Missing `current_value` or `closing_units` count as zero.
pub fn calculate_valuation(
    holding: &Holding,
    flows: &FlowTotals,
    lots: &LotMatchResult,
) -> Result<ValuationMetrics, CalculatorError> {
    let key = holding.key();
    let guard = Guard { key: &key };
    let current_value = holding.value();

    let current_nav = guard.ratio(current_value, holding.units(), "current_nav")?;
    let investment_left = guard.sub(flows.invested_amount, lots.total_cost, "investment_left")?;

    let unrealized_gain_loss = guard.sub(current_value, investment_left, "unrealized_gain_loss")?;
    let unrealized_gain_loss_percent = guard.percent(
        unrealized_gain_loss,
        investment_left,
        "unrealized_gain_loss_percent",
    )?;

    let realized_gain_loss =
        guard.sub(flows.redeemed_amount, lots.total_cost, "realized_gain_loss")?;
    let realized_gain_loss_percent = guard.percent(
        realized_gain_loss,
        lots.total_cost,
        "realized_gain_loss_percent",
    )?;

    let absolute_return_percent =
        guard.percent(current_value, investment_left, "absolute_return_percent")?;

    Ok(ValuationMetrics {
        current_nav,
        investment_left,
        unrealized_gain_loss,
        unrealized_gain_loss_percent,
        realized_gain_loss,
        realized_gain_loss_percent,
        absolute_return_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn holding(current_value: Option<Decimal>, closing_units: Option<Decimal>) -> Holding {
        Holding {
            folio_no: "F1".to_string(),
            scheme: "Scheme A".to_string(),
            pan_no: "ABCDE1234F".to_string(),
            holder_name: None,
            closing_units,
            current_value,
            email: None,
            mobile_no: None,
        }
    }

    #[test]
    fn test_worked_scenario() {
        let flows = FlowTotals {
            invested_amount: dec!(1500),
            redeemed_units: dec!(25),
            redeemed_amount: dec!(300),
        };
        let lots = LotMatchResult {
            sold_units: dec!(100),
            total_cost: dec!(62.5),
            adjusted_units: dec!(75),
            adjusted_amount: dec!(937.5),
            adjusted_nav: dec!(12.5),
        };
        let metrics =
            calculate_valuation(&holding(Some(dec!(800)), Some(dec!(115))), &flows, &lots).unwrap();

        assert_eq!(metrics.current_nav.round_dp(4), dec!(6.9565));
        assert_eq!(metrics.investment_left, dec!(1437.5));
        assert_eq!(metrics.unrealized_gain_loss, dec!(-637.5));
        assert_eq!(metrics.unrealized_gain_loss_percent.round_dp(2), dec!(-44.35));
        assert_eq!(metrics.realized_gain_loss, dec!(237.5));
        assert_eq!(metrics.realized_gain_loss_percent, dec!(380));
        assert_eq!(metrics.absolute_return_percent.round_dp(2), dec!(55.65));
    }

    #[test]
    fn test_zero_closing_units_gives_zero_nav() {
        let metrics = calculate_valuation(
            &holding(Some(dec!(1234.56)), Some(dec!(0))),
            &FlowTotals::default(),
            &LotMatchResult::default(),
        )
        .unwrap();
        assert_eq!(metrics.current_nav, dec!(0));
    }

    #[test]
    fn test_fully_redeemed_position_has_zero_percentages() {
        // Everything invested was consumed, nothing left to measure against.
        let flows = FlowTotals {
            invested_amount: dec!(1000),
            redeemed_units: dec!(100),
            redeemed_amount: dec!(1100),
        };
        let lots = LotMatchResult {
            sold_units: dec!(100),
            total_cost: dec!(1000),
            ..Default::default()
        };
        let metrics =
            calculate_valuation(&holding(Some(dec!(0)), Some(dec!(0))), &flows, &lots).unwrap();

        assert_eq!(metrics.investment_left, dec!(0));
        assert_eq!(metrics.unrealized_gain_loss_percent, dec!(0));
        assert_eq!(metrics.absolute_return_percent, dec!(0));
        assert_eq!(metrics.realized_gain_loss, dec!(100));
        assert_eq!(metrics.realized_gain_loss_percent, dec!(10));
    }

    #[test]
    fn test_no_consumed_cost_gives_zero_realized_percent() {
        let flows = FlowTotals {
            invested_amount: dec!(500),
            ..Default::default()
        };
        let metrics = calculate_valuation(
            &holding(Some(dec!(550)), Some(dec!(50))),
            &flows,
            &LotMatchResult::default(),
        )
        .unwrap();

        assert_eq!(metrics.current_nav, dec!(11));
        assert_eq!(metrics.investment_left, dec!(500));
        assert_eq!(metrics.realized_gain_loss, dec!(0));
        assert_eq!(metrics.realized_gain_loss_percent, dec!(0));
        assert_eq!(metrics.unrealized_gain_loss_percent, dec!(10));
        assert_eq!(metrics.absolute_return_percent, dec!(110));
    }

    #[test]
    fn test_missing_position_fields_count_as_zero() {
        let metrics = calculate_valuation(
            &holding(None, None),
            &FlowTotals {
                invested_amount: dec!(200),
                ..Default::default()
            },
            &LotMatchResult::default(),
        )
        .unwrap();
        assert_eq!(metrics.current_nav, dec!(0));
        assert_eq!(metrics.unrealized_gain_loss, dec!(-200));
        assert_eq!(metrics.unrealized_gain_loss_percent, dec!(-100));
    }
}
