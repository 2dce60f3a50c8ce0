//! Scheme partitioning.
//!
//! Unit counts and per-unit prices are only comparable within one scheme, so
//! every computation downstream runs over a single partition.

use std::collections::BTreeMap;

use crate::transactions::{sort_chronologically, Transaction};

/// Transactions of one scheme, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemePartition {
    pub scheme: String,
    pub transactions: Vec<Transaction>,
}

/// Splits `transactions` into one partition per distinct scheme value.
///
/// Partitions are returned ordered by scheme name and each is sorted
/// chronologically. No transaction is dropped or duplicated.
pub fn partition_by_scheme(transactions: Vec<Transaction>) -> Vec<SchemePartition> {
    let mut by_scheme: BTreeMap<String, Vec<Transaction>> = BTreeMap::new();
    for txn in transactions {
        by_scheme.entry(txn.scheme.clone()).or_default().push(txn);
    }

    by_scheme
        .into_iter()
        .map(|(scheme, mut transactions)| {
            sort_chronologically(&mut transactions);
            SchemePartition {
                scheme,
                transactions,
            }
        })
        .collect()
}
