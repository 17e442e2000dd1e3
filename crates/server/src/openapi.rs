use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Stored record as returned by the items endpoints.
#[derive(Serialize, ToSchema)]
pub struct ItemDoc {
    #[serde(rename = "Key")]
    pub key: String,
    // NULL when the row was written without a value
    #[serde(rename = "Value")]
    pub value: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Key-Value Store API",
        version = "v1",
        description = "A simple key-value store API using Rust and SQLite"
    ),
    paths(
        crate::routes::health,
        crate::routes::items::get_all_items,
        crate::routes::items::add_item,
        crate::routes::items::update_item,
        crate::routes::items::delete_item,
    ),
    components(
        schemas(
            HealthResponse,
            ItemDoc,
            crate::routes::items::CreateItemRequest,
            crate::routes::items::UpdateItemRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "items")
    )
)]
pub struct ApiDoc;
