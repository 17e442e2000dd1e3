use async_trait::async_trait;
use models::db::{ScopedConnection, StoreConfig};
use models::kv_entry::{self, Model};
use sea_orm::DbErr;
use tracing::{debug, warn};

use crate::errors::ServiceError;

#[async_trait]
pub trait KeyValueRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Model>, ServiceError>;
    /// Fails with [`ServiceError::Conflict`] when the key is already stored.
    async fn create(&self, key: &str, value: &str) -> Result<Model, ServiceError>;
    /// Returns false when no row has this key.
    async fn update(&self, key: &str, value: &str) -> Result<bool, ServiceError>;
    /// Returns false when no row has this key.
    async fn delete(&self, key: &str) -> Result<bool, ServiceError>;
}

/// SQLite-backed repository. Every call opens its own connection and closes
/// it before returning; nothing is cached between calls.
pub struct SqliteKeyValueRepository {
    cfg: StoreConfig,
}

impl SqliteKeyValueRepository {
    pub fn new(cfg: StoreConfig) -> Self { Self { cfg } }

    async fn open(&self) -> Result<ScopedConnection, ServiceError> {
        Ok(ScopedConnection::open(&self.cfg).await?)
    }
}

/// The statement's outcome wins over a failed close; the close error is only logged.
fn after_close<T>(outcome: T, closed: Result<(), DbErr>) -> T {
    if let Err(e) = closed {
        warn!(error = %e, "store connection close failed");
    }
    outcome
}

#[async_trait]
impl KeyValueRepository for SqliteKeyValueRepository {
    async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        let scoped = self.open().await?;
        let res = kv_entry::list(scoped.conn()).await;
        Ok(after_close(res, scoped.close().await)?)
    }

    async fn create(&self, key: &str, value: &str) -> Result<Model, ServiceError> {
        let scoped = self.open().await?;
        let res = kv_entry::insert(scoped.conn(), key, value).await;
        after_close(res, scoped.close().await).map_err(|e| {
            debug!(%key, error = %e, "insert rejected");
            ServiceError::from_insert(key, e)
        })
    }

    async fn update(&self, key: &str, value: &str) -> Result<bool, ServiceError> {
        let scoped = self.open().await?;
        let res = kv_entry::update_value(scoped.conn(), key, value).await;
        let affected = after_close(res, scoped.close().await)?;
        Ok(affected > 0)
    }

    async fn delete(&self, key: &str) -> Result<bool, ServiceError> {
        let scoped = self.open().await?;
        let res = kv_entry::delete(scoped.conn(), key).await;
        let affected = after_close(res, scoped.close().await)?;
        Ok(affected > 0)
    }
}
