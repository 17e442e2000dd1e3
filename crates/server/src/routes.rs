use axum::{
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::{metrics, types::Health};

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod items;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics_handler() -> (StatusCode, String) {
    metrics::encode_metrics()
}

/// Build the full application router: item CRUD, ops endpoints and Swagger UI.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let item_routes = Router::new()
        .route("/items", get(items::get_all_items).post(items::add_item))
        .route("/items/:key", put(items::update_item).delete(items::delete_item));

    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler));

    let docs = SwaggerUi::new("/swagger").url("/swagger/v1/swagger.json", ApiDoc::openapi());

    item_routes
        .merge(ops)
        .merge(docs)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
