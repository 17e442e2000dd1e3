
/// Statement-level CRUD tests against the key-value table
pub mod crud_tests;

use crate::db::{bootstrap, StoreConfig};

/// Fresh SQLite file under the temp dir with the table already created.
pub(crate) async fn temp_store() -> anyhow::Result<(StoreConfig, std::path::PathBuf)> {
    let path = std::env::temp_dir().join(format!("kv_models_{}.db", uuid::Uuid::new_v4()));
    let cfg = StoreConfig::for_path(path.to_str().unwrap());
    bootstrap(&cfg).await?;
    Ok((cfg, path))
}
