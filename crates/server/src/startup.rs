use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use models::db::{self, StoreConfig};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Make sure the store file and table exist, then build the router over it.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    common::env::ensure_data_dir(&cfg.database.file_path()).await?;

    let store = StoreConfig::from_config(&cfg.database);
    db::bootstrap(&store).await?;

    Ok(routes::build_router(AppState::sqlite(store), build_cors()))
}

/// Public entry: load configuration, build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load_and_validate()?;
    run_with_config(cfg).await
}

pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, db = %cfg.database.file_path(), "key-value api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
