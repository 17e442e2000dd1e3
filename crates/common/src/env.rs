//! Environment/runtime helpers
//!
//! Sanity checks to ensure the database file can be created at startup.

use std::path::Path;

use tracing::{debug, warn};

/// Ensure the parent directory of the SQLite file exists.
///
/// In-memory databases (`:memory:`) and bare file names need no directory.
pub async fn ensure_data_dir(db_path: &str) -> anyhow::Result<()> {
    if db_path.is_empty() || db_path == ":memory:" {
        warn!(%db_path, "database path is not file-backed; records will not persist");
        return Ok(());
    }
    let parent = match Path::new(db_path).parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(()),
    };
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    debug!(dir = %parent.display(), "data directory ready");
    Ok(())
}
