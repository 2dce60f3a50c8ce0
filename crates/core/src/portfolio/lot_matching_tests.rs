use crate::holdings::HoldingKey;
use crate::portfolio::lot_matching::{match_lots, AdjustmentNavPolicy, LotMatchResult};
use crate::transactions::Transaction;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn key() -> HoldingKey {
    HoldingKey::new("13299340/20", "Liquid Fund - Growth")
}

fn txn(no: u32, code: &str, amount: Decimal, units: Option<Decimal>, nav: Decimal) -> Transaction {
    Transaction {
        trxn_no: format!("T{}", no),
        folio_no: "13299340/20".to_string(),
        scheme: "Liquid Fund - Growth".to_string(),
        transaction_type: Some(code.to_string()),
        trade_date: NaiveDate::from_ymd_opt(2024, 1, no),
        units,
        amount: Some(amount),
        nav: Some(nav),
        ..Default::default()
    }
}

fn worked_scenario() -> Vec<Transaction> {
    vec![
        txn(1, "P", dec!(1000), Some(dec!(100)), dec!(10.0)),
        txn(2, "P", dec!(500), Some(dec!(40)), dec!(12.5)),
        txn(3, "R", dec!(300), Some(dec!(25)), dec!(12.0)),
    ]
}

#[test]
fn test_worked_scenario_prices_remainder_at_triggering_record() {
    let result = match_lots(
        &key(),
        &worked_scenario(),
        dec!(25),
        AdjustmentNavPolicy::TriggeringRecord,
    )
    .unwrap();

    assert_eq!(result.sold_units, dec!(100));
    assert_eq!(result.adjusted_units, dec!(75));
    assert_eq!(result.adjusted_amount, dec!(937.5));
    assert_eq!(result.adjusted_nav, dec!(12.5));
    assert_eq!(result.total_cost, dec!(62.5));
    assert!(result.was_adjusted());
}

#[test]
fn test_worked_scenario_split_lot_prices_remainder_at_its_own_nav() {
    let result = match_lots(
        &key(),
        &worked_scenario(),
        dec!(25),
        AdjustmentNavPolicy::SplitLot,
    )
    .unwrap();

    assert_eq!(result.sold_units, dec!(100));
    assert_eq!(result.adjusted_units, dec!(75));
    assert_eq!(result.adjusted_amount, dec!(750.0));
    assert_eq!(result.adjusted_nav, dec!(10.0));
    assert_eq!(result.total_cost, dec!(250.0));
}

#[test]
fn test_no_redemptions_consumes_nothing() {
    let transactions = vec![
        txn(1, "P", dec!(1000), Some(dec!(100)), dec!(10)),
        txn(2, "P", dec!(500), Some(dec!(40)), dec!(12.5)),
    ];
    for policy in [
        AdjustmentNavPolicy::TriggeringRecord,
        AdjustmentNavPolicy::SplitLot,
    ] {
        let result = match_lots(&key(), &transactions, dec!(0), policy).unwrap();
        assert_eq!(result, LotMatchResult::default(), "policy {policy}");
    }
}

#[test]
fn test_exact_lot_boundary_stops_without_adjustment() {
    let transactions = vec![
        txn(1, "P", dec!(1000), Some(dec!(100)), dec!(10)),
        txn(2, "P", dec!(500), Some(dec!(40)), dec!(12.5)),
        txn(3, "R", dec!(1100), Some(dec!(100)), dec!(11)),
    ];
    let result = match_lots(
        &key(),
        &transactions,
        dec!(100),
        AdjustmentNavPolicy::TriggeringRecord,
    )
    .unwrap();

    assert_eq!(result.sold_units, dec!(100));
    assert_eq!(result.total_cost, dec!(1000));
    assert!(!result.was_adjusted());
    assert_eq!(result.adjusted_nav, dec!(0));
}

#[test]
fn test_lots_are_consumed_across_multiple_purchases() {
    let transactions = vec![
        txn(1, "P", dec!(1000), Some(dec!(100)), dec!(10)),
        txn(2, "SI", dec!(500), Some(dec!(40)), dec!(12.5)),
        txn(3, "DR", dec!(60), Some(dec!(5)), dec!(12)),
        txn(4, "R", dec!(1560), Some(dec!(120)), dec!(13)),
    ];
    let result = match_lots(
        &key(),
        &transactions,
        dec!(120),
        AdjustmentNavPolicy::TriggeringRecord,
    )
    .unwrap();

    // 100 + 40 walked, overshoot of 20 noticed on the DR record (nav 12)
    assert_eq!(result.sold_units, dec!(140));
    assert_eq!(result.adjusted_units, dec!(20));
    assert_eq!(result.adjusted_nav, dec!(12));
    assert_eq!(result.adjusted_amount, dec!(240));
    assert_eq!(result.total_cost, dec!(1260));
}

#[test]
fn test_triggering_record_may_be_a_redemption() {
    let transactions = vec![
        txn(1, "P", dec!(1000), Some(dec!(100)), dec!(10)),
        txn(2, "R", dec!(330), Some(dec!(30)), dec!(11)),
    ];
    let result = match_lots(
        &key(),
        &transactions,
        dec!(30),
        AdjustmentNavPolicy::TriggeringRecord,
    )
    .unwrap();

    assert_eq!(result.adjusted_units, dec!(70));
    assert_eq!(result.adjusted_nav, dec!(11));
    assert_eq!(result.total_cost, dec!(1000) - dec!(770));
}

#[test]
fn test_overshoot_on_last_record_is_not_adjusted_in_legacy_walk() {
    let transactions = vec![
        txn(1, "R", dec!(300), Some(dec!(25)), dec!(12)),
        txn(2, "P", dec!(1000), Some(dec!(100)), dec!(10)),
    ];
    let legacy = match_lots(
        &key(),
        &transactions,
        dec!(25),
        AdjustmentNavPolicy::TriggeringRecord,
    )
    .unwrap();
    assert_eq!(legacy.sold_units, dec!(100));
    assert_eq!(legacy.total_cost, dec!(1000));
    assert!(!legacy.was_adjusted());

    let corrected =
        match_lots(&key(), &transactions, dec!(25), AdjustmentNavPolicy::SplitLot).unwrap();
    assert_eq!(corrected.adjusted_units, dec!(75));
    assert_eq!(corrected.total_cost, dec!(250));
}

#[test]
fn test_null_units_terminates_walk() {
    let transactions = vec![
        txn(1, "P", dec!(1000), Some(dec!(100)), dec!(10)),
        txn(2, "P", dec!(500), None, dec!(12.5)),
        txn(3, "P", dec!(800), Some(dec!(50)), dec!(16)),
    ];
    let result = match_lots(
        &key(),
        &transactions,
        dec!(150),
        AdjustmentNavPolicy::TriggeringRecord,
    )
    .unwrap();

    assert_eq!(result.sold_units, dec!(100));
    assert_eq!(result.total_cost, dec!(1000));
    assert!(!result.was_adjusted());
}

#[test]
fn test_consuming_and_unclassified_records_add_no_lots() {
    let transactions = vec![
        txn(1, "R", dec!(100), Some(dec!(10)), dec!(10)),
        txn(2, "J", dec!(100), Some(dec!(10)), dec!(10)),
        txn(3, "P", dec!(400), Some(dec!(40)), dec!(10)),
    ];
    let result = match_lots(
        &key(),
        &transactions,
        dec!(40),
        AdjustmentNavPolicy::TriggeringRecord,
    )
    .unwrap();
    assert_eq!(result.sold_units, dec!(40));
    assert_eq!(result.total_cost, dec!(400));
}

#[test]
fn test_missing_nav_costs_zero() {
    let mut lot = txn(1, "P", dec!(1000), Some(dec!(100)), dec!(10));
    lot.nav = None;
    let result = match_lots(
        &key(),
        &[lot],
        dec!(100),
        AdjustmentNavPolicy::TriggeringRecord,
    )
    .unwrap();
    assert_eq!(result.sold_units, dec!(100));
    assert_eq!(result.total_cost, dec!(0));
}

#[test]
fn test_policy_parsing() {
    assert_eq!(
        "triggering-record".parse::<AdjustmentNavPolicy>(),
        Ok(AdjustmentNavPolicy::TriggeringRecord)
    );
    assert_eq!(
        " Split-Lot ".parse::<AdjustmentNavPolicy>(),
        Ok(AdjustmentNavPolicy::SplitLot)
    );
    assert!("fifo".parse::<AdjustmentNavPolicy>().is_err());
    assert_eq!(AdjustmentNavPolicy::default().to_string(), "triggering-record");
}
