use std::sync::Arc;

use models::db::StoreConfig;
use service::kv::{KeyValueRepository, KeyValueService, SqliteKeyValueRepository};

/// Shared handler state. Holds configuration only; no records are cached.
#[derive(Clone)]
pub struct AppState {
    pub kv: KeyValueService,
}

impl AppState {
    pub fn new(repo: Arc<dyn KeyValueRepository>) -> Self {
        Self { kv: KeyValueService::new(repo) }
    }

    pub fn sqlite(store: StoreConfig) -> Self {
        Self::new(Arc::new(SqliteKeyValueRepository::new(store)))
    }
}
