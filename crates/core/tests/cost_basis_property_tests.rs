//! Property-based integration tests for the cost-basis engine.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use chrono::NaiveDate;
use navfolio_core::holdings::{Holding, HoldingKey};
use navfolio_core::portfolio::{
    aggregate_flows, calculate_valuation, match_lots, partition_by_scheme, summarize_holding,
    AdjustmentNavPolicy, CostBasisOptions, FlowTotals, LotMatchResult,
};
use navfolio_core::transactions::Transaction;
use proptest::prelude::*;
use rust_decimal::Decimal;

const FOLIO: &str = "F-100";
const SCHEME: &str = "Equity Fund";

// =============================================================================
// Generators
// =============================================================================

/// Positive amount with two decimal places.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Positive unit quantity with three decimal places.
fn arb_units() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000).prop_map(|milli| Decimal::new(milli, 3))
}

fn arb_nav() -> impl Strategy<Value = Decimal> {
    (100i64..100_000).prop_map(|v| Decimal::new(v, 2))
}

fn arb_accumulating_code() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("P"), Just("SI"), Just("TI"), Just("DR"), Just("PSIP")]
}

fn arb_any_code() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("P"),
        Just("SI"),
        Just("TI"),
        Just("DR"),
        Just("R"),
        Just("SO"),
        Just("TO"),
        Just("J"),
    ]
}

fn arb_scheme() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(SCHEME), Just("Debt Fund"), Just("Liquid Fund")]
}

fn transaction(
    idx: usize,
    scheme: &str,
    code: &str,
    day: u32,
    amount: Decimal,
    units: Decimal,
    nav: Decimal,
) -> Transaction {
    Transaction {
        trxn_no: format!("T{:04}", idx),
        folio_no: FOLIO.to_string(),
        scheme: scheme.to_string(),
        transaction_type: Some(code.to_string()),
        trade_date: NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.checked_add_days(chrono::Days::new(day as u64))),
        units: Some(units),
        amount: Some(amount),
        nav: Some(nav),
        ..Default::default()
    }
}

fn arb_accumulating(max: usize) -> impl Strategy<Value = Vec<Transaction>> {
    proptest::collection::vec(
        (arb_accumulating_code(), 0u32..365, arb_amount(), arb_units(), arb_nav()),
        1..=max,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (code, day, amount, units, nav))| {
                transaction(i, SCHEME, code, day, amount, units, nav)
            })
            .collect()
    })
}

fn arb_mixed(max: usize) -> impl Strategy<Value = Vec<Transaction>> {
    proptest::collection::vec(
        (
            arb_scheme(),
            arb_any_code(),
            0u32..365,
            arb_amount(),
            arb_units(),
            arb_nav(),
        ),
        0..=max,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (scheme, code, day, amount, units, nav))| {
                transaction(i, scheme, code, day, amount, units, nav)
            })
            .collect()
    })
}

fn arb_policy() -> impl Strategy<Value = AdjustmentNavPolicy> {
    prop_oneof![
        Just(AdjustmentNavPolicy::TriggeringRecord),
        Just(AdjustmentNavPolicy::SplitLot),
    ]
}

fn holding(closing_units: Decimal, current_value: Decimal) -> Holding {
    Holding {
        folio_no: FOLIO.to_string(),
        scheme: SCHEME.to_string(),
        pan_no: "ABCDE1234F".to_string(),
        holder_name: None,
        closing_units: Some(closing_units),
        current_value: Some(current_value),
        email: None,
        mobile_no: None,
    }
}

fn key() -> HoldingKey {
    HoldingKey::new(FOLIO, SCHEME)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// With no consuming records nothing is realized and the whole invested
    /// amount is still in the position.
    #[test]
    fn prop_accumulate_only_keeps_full_investment(
        transactions in arb_accumulating(20),
        policy in arb_policy(),
        current_value in arb_amount(),
        closing_units in arb_units(),
    ) {
        let flows = aggregate_flows(&key(), &transactions).unwrap();
        let lots = match_lots(&key(), &transactions, flows.redeemed_units, policy).unwrap();
        let metrics =
            calculate_valuation(&holding(closing_units, current_value), &flows, &lots).unwrap();

        prop_assert_eq!(flows.redeemed_units, Decimal::ZERO);
        prop_assert_eq!(metrics.investment_left, flows.invested_amount);
        prop_assert_eq!(metrics.realized_gain_loss, Decimal::ZERO);
    }

    /// Current NAV is zero whenever the closing balance is zero.
    #[test]
    fn prop_zero_closing_units_gives_zero_nav(current_value in arb_amount()) {
        let metrics = calculate_valuation(
            &holding(Decimal::ZERO, current_value),
            &FlowTotals::default(),
            &LotMatchResult::default(),
        )
        .unwrap();
        prop_assert_eq!(metrics.current_nav, Decimal::ZERO);
    }

    /// If redemptions cover every accumulated unit the walk never overshoots.
    #[test]
    fn prop_no_overshoot_means_no_adjustment(
        mut transactions in arb_accumulating(20),
        extra in 0i64..1_000,
        policy in arb_policy(),
    ) {
        let accumulated: Decimal = transactions.iter().map(|t| t.units_or_zero()).sum();
        let redeemed = accumulated + Decimal::from(extra);
        transactions.push(transaction(
            999,
            SCHEME,
            "R",
            400,
            Decimal::ONE,
            redeemed,
            Decimal::ONE,
        ));

        let flows = aggregate_flows(&key(), &transactions).unwrap();
        prop_assert_eq!(flows.redeemed_units, redeemed);

        let lots = match_lots(&key(), &transactions, flows.redeemed_units, policy).unwrap();
        prop_assert_eq!(lots.adjusted_units, Decimal::ZERO);
        prop_assert!(lots.sold_units <= redeemed);
    }

    /// Partitioning neither drops nor duplicates transactions, and never
    /// mixes schemes.
    #[test]
    fn prop_partitioning_is_lossless(transactions in arb_mixed(40)) {
        let total = transactions.len();
        let partitions = partition_by_scheme(transactions);

        let partitioned: usize = partitions.iter().map(|p| p.transactions.len()).sum();
        prop_assert_eq!(partitioned, total);
        for partition in &partitions {
            prop_assert!(partition.transactions.iter().all(|t| t.scheme == partition.scheme));
        }
    }

    /// Input order has no effect on any computed figure.
    #[test]
    fn prop_metrics_independent_of_input_order(
        (original, shuffled) in arb_mixed(30)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
        policy in arb_policy(),
    ) {
        let h = holding(Decimal::new(1000, 0), Decimal::new(25_000, 0));
        let options = CostBasisOptions { adjustment_nav: policy };

        let a = summarize_holding(&h, original, &options).unwrap();
        let b = summarize_holding(&h, shuffled, &options).unwrap();
        prop_assert_eq!(a, b);
    }
}
