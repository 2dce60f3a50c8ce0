use super::DbPool;
use crate::errors::StorageError;
use diesel::SqliteConnection;
use log::error;
use navfolio_core::errors::Result;
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

// A write job runs against the writer's connection and reports a core Result.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type ErasedReply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, ErasedReply)>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection,
    /// inside an immediate transaction. An `Err` from the job rolls back
    /// everything it wrote.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .map_err(|_| StorageError::WriterUnavailable("writer actor has stopped".to_string()))?;

        let boxed = ret_rx.await.map_err(|_| {
            StorageError::WriterUnavailable("writer actor dropped the reply".to_string())
        })??;

        boxed.downcast::<T>().map(|v| *v).map_err(|_| {
            StorageError::CoreError("writer returned an unexpected result type".to_string())
                .into()
        })
    }
}

/// Spawns a background Tokio task that acts as the single writer to the
/// database. The actor holds one pooled connection for its lifetime and runs
/// jobs serially. Must be called from within a Tokio runtime.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(ErasedJob, ErasedReply)>(1024);

    tokio::spawn(async move {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                // Pending and future exec calls see a closed channel.
                error!("Writer actor could not acquire a connection: {}", e);
                return;
            }
        };

        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(|e: StorageError| e.into());

            // The requester may have gone away; nothing to do then.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}
