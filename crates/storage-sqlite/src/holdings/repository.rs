use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use navfolio_core::holdings::{Holding, HoldingFilter, HoldingRepositoryTrait};
use navfolio_core::Result;

use super::model::HoldingDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::holdings;

pub struct HoldingRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl HoldingRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        HoldingRepository { pool, writer }
    }
}

#[async_trait]
impl HoldingRepositoryTrait for HoldingRepository {
    fn filter(&self, filter: &HoldingFilter) -> Result<Vec<Holding>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = holdings::table.into_boxed();
        if let Some(investor_id) = filter.investor_id.as_deref() {
            query = query.filter(holdings::pan_no.eq(investor_id));
        }
        if let Some(folio_no) = filter.folio_no.as_deref() {
            query = query.filter(holdings::folio_no.eq(folio_no));
        }

        let rows = query
            .order((holdings::folio_no.asc(), holdings::scheme.asc()))
            .select(HoldingDB::as_select())
            .load::<HoldingDB>(&mut conn)
            .map_err(StorageError::from)?;
        debug!("Loaded {} holdings", rows.len());

        Ok(rows.into_iter().map(Holding::from).collect())
    }

    async fn upsert_holdings(&self, holdings_to_upsert: Vec<Holding>) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let now = Utc::now().naive_utc();
                let mut affected_rows = 0;
                for holding in holdings_to_upsert {
                    let holding_db = HoldingDB::from_domain(holding, now);
                    affected_rows += diesel::insert_into(holdings::table)
                        .values(&holding_db)
                        .on_conflict((holdings::folio_no, holdings::scheme))
                        .do_update()
                        .set(&holding_db)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(affected_rows)
            })
            .await
    }
}
