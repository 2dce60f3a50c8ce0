//! Database models for holdings.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use navfolio_core::holdings::Holding;

use crate::utils::{decimal_from_db, decimal_to_db};

/// Database model for holdings
#[derive(Queryable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::holdings)]
#[diesel(primary_key(folio_no, scheme))]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HoldingDB {
    pub folio_no: String,
    pub scheme: String,
    pub pan_no: String,
    pub holder_name: Option<String>,
    pub closing_units: Option<String>,
    pub current_value: Option<String>,
    pub email: Option<String>,
    pub mobile_no: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl HoldingDB {
    pub fn from_domain(domain: Holding, updated_at: NaiveDateTime) -> Self {
        Self {
            folio_no: domain.folio_no,
            scheme: domain.scheme,
            pan_no: domain.pan_no,
            holder_name: domain.holder_name,
            closing_units: decimal_to_db(domain.closing_units),
            current_value: decimal_to_db(domain.current_value),
            email: domain.email,
            mobile_no: domain.mobile_no,
            updated_at,
        }
    }
}

impl From<HoldingDB> for Holding {
    fn from(db: HoldingDB) -> Self {
        Self {
            folio_no: db.folio_no,
            scheme: db.scheme,
            pan_no: db.pan_no,
            holder_name: db.holder_name,
            closing_units: decimal_from_db(db.closing_units, "closing_units"),
            current_value: decimal_from_db(db.current_value, "current_value"),
            email: db.email,
            mobile_no: db.mobile_no,
        }
    }
}
