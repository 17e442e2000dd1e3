#![cfg(test)]
use std::path::PathBuf;

use models::db::{bootstrap, StoreConfig};

use crate::kv::SqliteKeyValueRepository;

/// Repository over a fresh SQLite file in the temp dir, table created.
pub async fn temp_repo() -> Result<(SqliteKeyValueRepository, PathBuf), anyhow::Error> {
    let path = std::env::temp_dir().join(format!("kv_service_{}.db", uuid::Uuid::new_v4()));
    let cfg = StoreConfig::for_path(path.to_str().unwrap());
    bootstrap(&cfg).await?;
    Ok((SqliteKeyValueRepository::new(cfg), path))
}
