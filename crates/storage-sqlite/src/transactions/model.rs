//! Database models for transactions.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use navfolio_core::transactions::Transaction;

use crate::utils::{date_from_db, date_to_db, decimal_from_db, decimal_to_db};

/// Database model for transactions
#[derive(Queryable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(primary_key(trxn_no))]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub trxn_no: String,
    pub folio_no: String,
    pub scheme: String,
    pub transaction_type: Option<String>,
    pub trade_date: Option<String>,
    pub post_date: Option<String>,
    pub units: Option<String>,
    pub amount: Option<String>,
    pub nav: Option<String>,
    pub stamp_duty: Option<String>,
    pub pan: Option<String>,
    pub investor_name: Option<String>,
    pub broker_code: Option<String>,
    pub amc_code: Option<String>,
    pub product_code: Option<String>,
    pub scheme_type: Option<String>,
    pub transaction_nature: Option<String>,
    pub seq_no: Option<i64>,
    pub sip_trxn_no: Option<String>,
    pub report_date: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl TransactionDB {
    pub fn from_domain(domain: Transaction, updated_at: NaiveDateTime) -> Self {
        Self {
            trxn_no: domain.trxn_no,
            folio_no: domain.folio_no,
            scheme: domain.scheme,
            transaction_type: domain.transaction_type,
            trade_date: date_to_db(domain.trade_date),
            post_date: date_to_db(domain.post_date),
            units: decimal_to_db(domain.units),
            amount: decimal_to_db(domain.amount),
            nav: decimal_to_db(domain.nav),
            stamp_duty: decimal_to_db(domain.stamp_duty),
            pan: domain.pan,
            investor_name: domain.investor_name,
            broker_code: domain.broker_code,
            amc_code: domain.amc_code,
            product_code: domain.product_code,
            scheme_type: domain.scheme_type,
            transaction_nature: domain.transaction_nature,
            seq_no: domain.seq_no,
            sip_trxn_no: domain.sip_trxn_no,
            report_date: date_to_db(domain.report_date),
            updated_at,
        }
    }
}

impl From<TransactionDB> for Transaction {
    fn from(db: TransactionDB) -> Self {
        Self {
            trxn_no: db.trxn_no,
            folio_no: db.folio_no,
            scheme: db.scheme,
            transaction_type: db.transaction_type,
            trade_date: date_from_db(db.trade_date, "trade_date"),
            post_date: date_from_db(db.post_date, "post_date"),
            units: decimal_from_db(db.units, "units"),
            amount: decimal_from_db(db.amount, "amount"),
            nav: decimal_from_db(db.nav, "nav"),
            stamp_duty: decimal_from_db(db.stamp_duty, "stamp_duty"),
            pan: db.pan,
            investor_name: db.investor_name,
            broker_code: db.broker_code,
            amc_code: db.amc_code,
            product_code: db.product_code,
            scheme_type: db.scheme_type,
            transaction_nature: db.transaction_nature,
            seq_no: db.seq_no,
            sip_trxn_no: db.sip_trxn_no,
            report_date: date_from_db(db.report_date, "report_date"),
        }
    }
}
