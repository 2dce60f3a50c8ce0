use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use navfolio_core::transactions::{Transaction, TransactionRepositoryTrait};
use navfolio_core::Result;

use super::model::TransactionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::transactions;

pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TransactionRepository { pool, writer }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    /// Rows come back in storage order; callers sort.
    fn transactions_for(&self, folio_no: &str, scheme: &str) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .filter(transactions::folio_no.eq(folio_no))
            .filter(transactions::scheme.eq(scheme))
            .select(TransactionDB::as_select())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Transaction::from).collect())
    }

    async fn upsert_transactions(&self, to_upsert: Vec<Transaction>) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let now = Utc::now().naive_utc();
                let mut affected_rows = 0;
                for transaction in to_upsert {
                    let transaction_db = TransactionDB::from_domain(transaction, now);
                    affected_rows += diesel::insert_into(transactions::table)
                        .values(&transaction_db)
                        .on_conflict(transactions::trxn_no)
                        .do_update()
                        .set(&transaction_db)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(affected_rows)
            })
            .await
    }
}
