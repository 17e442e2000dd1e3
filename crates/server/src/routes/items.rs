use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use common::metrics;
use models::kv_entry::Model;
use serde::Deserialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    #[serde(rename = "Key", alias = "key")]
    pub key: String,
    #[serde(rename = "Value", alias = "value")]
    pub value: String,
}

/// Any `Key` in the body is ignored; the path decides which row changes.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    #[serde(rename = "Value", alias = "value")]
    pub value: String,
}

fn outcome(res: &Result<impl Sized, ApiError>) -> &'static str {
    match res {
        Ok(_) => "ok",
        Err(ApiError::KeyExists) => "conflict",
        Err(ApiError::NotFound) => "not_found",
        Err(ApiError::Internal(_)) => "error",
    }
}

/// `/items/{key}` with the key percent-encoded as a single path segment.
pub fn item_location(key: &str) -> String {
    format!("/items/{}", urlencoding::encode(key))
}

#[utoipa::path(
    get, path = "/items", tag = "items", operation_id = "GetAllItems",
    responses(
        (status = 200, description = "Returns all stored key-value pairs", body = [crate::openapi::ItemDoc]),
        (status = 500, description = "Store failure")
    )
)]
pub async fn get_all_items(State(state): State<AppState>) -> Result<Json<Vec<Model>>, ApiError> {
    let res = state.kv.list().await.map_err(ApiError::from);
    metrics::record("list", outcome(&res));
    let items = res?;
    info!(count = items.len(), "list items");
    Ok(Json(items))
}

#[utoipa::path(
    post, path = "/items", tag = "items", operation_id = "AddItem",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ItemDoc,
            headers(("Location" = String, description = "/items/{key}"))),
        (status = 400, description = "Key already exists.", body = String),
        (status = 500, description = "Store failure")
    )
)]
pub async fn add_item(
    State(state): State<AppState>,
    Json(input): Json<CreateItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let res = state.kv.create(&input.key, &input.value).await.map_err(ApiError::from);
    metrics::record("create", outcome(&res));
    let created = res.map_err(|e| {
        if matches!(e, ApiError::KeyExists) {
            warn!(key = %input.key, "duplicate key rejected");
        }
        e
    })?;
    let location = item_location(&created.key);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    put, path = "/items/{key}", tag = "items", operation_id = "UpdateItem",
    params(("key" = String, Path, description = "Key of the item to update")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ItemDoc),
        (status = 404, description = "Key not found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(input): Json<UpdateItemRequest>,
) -> Result<Json<Model>, ApiError> {
    let res = state.kv.update(&key, &input.value).await.map_err(ApiError::from);
    metrics::record("update", outcome(&res));
    Ok(Json(res?))
}

#[utoipa::path(
    delete, path = "/items/{key}", tag = "items", operation_id = "DeleteItem",
    params(("key" = String, Path, description = "Key of the item to delete")),
    responses(
        (status = 200, description = "Deleted", body = String),
        (status = 404, description = "Key not found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<String>, ApiError> {
    let res = state.kv.delete(&key).await.map_err(ApiError::from);
    metrics::record("delete", outcome(&res));
    res?;
    Ok(Json(format!("Deleted {key}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_escapes_reserved_bytes() {
        assert_eq!(item_location("a"), "/items/a");
        assert_eq!(item_location("a b/c"), "/items/a%20b%2Fc");
        assert_eq!(item_location("é"), "/items/%C3%A9");
        assert_eq!(item_location("a?b#c"), "/items/a%3Fb%23c");
        assert_eq!(item_location("x-y_z.~"), "/items/x-y_z.~");
    }

    #[test]
    fn update_body_ignores_key() {
        let req: UpdateItemRequest =
            serde_json::from_str(r#"{"Key":"other","Value":"2"}"#).unwrap();
        assert_eq!(req.value, "2");
    }

    #[test]
    fn create_body_accepts_lowercase_names() {
        let req: CreateItemRequest = serde_json::from_str(r#"{"key":"a","value":"1"}"#).unwrap();
        assert_eq!((req.key.as_str(), req.value.as_str()), ("a", "1"));
    }
}
