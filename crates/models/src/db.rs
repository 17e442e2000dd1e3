use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tracing::{debug, info};

pub const CREATE_TABLE_SQL: &str =
    "CREATE TABLE IF NOT EXISTS KeyValueStore (Key TEXT PRIMARY KEY, Value TEXT)";

/// Connection settings for the SQLite store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub connect_timeout: Duration,
    pub sqlx_logging: bool,
}

impl StoreConfig {
    pub fn for_path(path: &str) -> Self {
        Self {
            url: sqlite_url(path),
            connect_timeout: Duration::from_secs(30),
            sqlx_logging: false,
        }
    }

    pub fn from_config(cfg: &configs::DatabaseConfig) -> Self {
        let url = if cfg.url.trim().is_empty() {
            sqlite_url(&cfg.path)
        } else {
            cfg.url.clone()
        };
        Self {
            url,
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            sqlx_logging: cfg.sqlx_logging,
        }
    }
}

/// `sqlite://{path}?mode=rwc`, so the file is created on first open.
pub fn sqlite_url(path: &str) -> String {
    if path == ":memory:" {
        return "sqlite::memory:".to_string();
    }
    format!("sqlite://{path}?mode=rwc")
}

/// A store connection that lives for exactly one operation.
///
/// Holds a single-connection handle. [`ScopedConnection::close`] releases it
/// on the success path; on any other path (early `?` return, panic, dropped
/// future) the inner handle's `Drop` releases it.
pub struct ScopedConnection {
    conn: DatabaseConnection,
}

impl ScopedConnection {
    pub async fn open(cfg: &StoreConfig) -> Result<Self, DbErr> {
        let mut opts = ConnectOptions::new(cfg.url.clone());
        opts.max_connections(1)
            .min_connections(0)
            .connect_timeout(cfg.connect_timeout)
            .sqlx_logging(cfg.sqlx_logging);
        let conn = Database::connect(opts).await?;
        debug!("store connection opened");
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    pub async fn close(self) -> Result<(), DbErr> {
        self.conn.close().await?;
        debug!("store connection closed");
        Ok(())
    }
}

/// Idempotent `CREATE TABLE IF NOT EXISTS`.
pub async fn ensure_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    db.execute_unprepared(CREATE_TABLE_SQL).await?;
    Ok(())
}

/// Open the store once at startup and make sure the table exists.
pub async fn bootstrap(cfg: &StoreConfig) -> Result<(), DbErr> {
    let scoped = ScopedConnection::open(cfg).await?;
    ensure_schema(scoped.conn()).await?;
    scoped.close().await?;
    info!(url = %cfg.url, "key-value table ready");
    Ok(())
}
