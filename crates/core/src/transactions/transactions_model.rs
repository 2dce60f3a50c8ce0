use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::classifier::{classify_code, TransactionDirection};
use crate::holdings::HoldingKey;

/// One registrar transaction against a (folio, scheme) pair.
///
/// Identity is the registrar transaction number; ingestion upserts by it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub trxn_no: String,
    pub folio_no: String,
    pub scheme: String,

    /// Registrar type code, e.g. "P", "R", "SI", "SO", "TI", "TO", "DR".
    pub transaction_type: Option<String>,
    pub trade_date: Option<NaiveDate>,
    pub post_date: Option<NaiveDate>,

    pub units: Option<Decimal>,
    pub amount: Option<Decimal>,
    /// Unit price at the time of the transaction.
    pub nav: Option<Decimal>,
    pub stamp_duty: Option<Decimal>,

    // Registrar metadata, carried through untouched
    pub pan: Option<String>,
    pub investor_name: Option<String>,
    pub broker_code: Option<String>,
    pub amc_code: Option<String>,
    pub product_code: Option<String>,
    pub scheme_type: Option<String>,
    pub transaction_nature: Option<String>,
    pub seq_no: Option<i64>,
    pub sip_trxn_no: Option<String>,
    pub report_date: Option<NaiveDate>,
}

impl Transaction {
    pub fn key(&self) -> HoldingKey {
        HoldingKey::new(self.folio_no.clone(), self.scheme.clone())
    }

    /// Direction of this transaction; a missing type code is `Unclassified`.
    pub fn direction(&self) -> TransactionDirection {
        classify_code(self.transaction_type.as_deref())
    }

    /// Get units, defaulting to zero if not set
    pub fn units_or_zero(&self) -> Decimal {
        self.units.unwrap_or(Decimal::ZERO)
    }

    /// Get amount, defaulting to zero if not set
    pub fn amount_or_zero(&self) -> Decimal {
        self.amount.unwrap_or(Decimal::ZERO)
    }

    /// Get NAV, defaulting to zero if not set
    pub fn nav_or_zero(&self) -> Decimal {
        self.nav.unwrap_or(Decimal::ZERO)
    }
}

/// `None` sorts after every `Some`.
fn cmp_nulls_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Total chronological order: trade date, post date, registrar sequence
/// number, then transaction number. Undated records go last.
pub fn chronological_cmp(a: &Transaction, b: &Transaction) -> Ordering {
    cmp_nulls_last(&a.trade_date, &b.trade_date)
        .then_with(|| cmp_nulls_last(&a.post_date, &b.post_date))
        .then_with(|| cmp_nulls_last(&a.seq_no, &b.seq_no))
        .then_with(|| a.trxn_no.cmp(&b.trxn_no))
}

/// Sorts oldest first. Lot matching depends on this order, so callers must
/// never rely on storage or retrieval order.
pub fn sort_chronologically(transactions: &mut [Transaction]) {
    transactions.sort_by(chronological_cmp);
}
