//! Item endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Item, ItemRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidItemId, ValidJson, ValidQuery};
use crate::http::server::AppState;
use crate::models::{ItemFields, Pagination, PaginationParams};

/// Create/replace item request
///
/// Older clients send `title` instead of `name`; both are accepted.
#[derive(Debug, Deserialize)]
pub struct ItemRequest {
    #[serde(alias = "title")]
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

impl TryFrom<ItemRequest> for ItemFields {
    type Error = crate::models::ValidationError;

    fn try_from(req: ItemRequest) -> Result<Self, Self::Error> {
        ItemFields::new(req.name, req.description, req.price, req.tax)
    }
}

/// Item response
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            tax: item.tax,
        }
    }
}

/// Delete confirmation
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// GET /items - list items in insertion order
async fn list_items(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let page = Pagination::from(params);
    let items = ItemRepo::new(&state.pool).list(page).await?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// POST /items - create an item
async fn create_item(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<ItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let fields = ItemFields::try_from(req)?;
    let item = ItemRepo::new(&state.pool).create(&fields).await?;

    Ok(Json(ItemResponse::from(item)))
}

/// GET /items/{id} - get a single item
async fn get_item(
    State(state): State<Arc<AppState>>,
    ValidItemId(id): ValidItemId,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = ItemRepo::new(&state.pool).get(id).await?;
    Ok(Json(ItemResponse::from(item)))
}

/// PUT /items/{id} - replace all fields of an item
async fn update_item(
    State(state): State<Arc<AppState>>,
    ValidItemId(id): ValidItemId,
    ValidJson(req): ValidJson<ItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let fields = ItemFields::try_from(req)?;
    let item = ItemRepo::new(&state.pool).update(id, &fields).await?;

    Ok(Json(ItemResponse::from(item)))
}

/// DELETE /items/{id} - delete an item
async fn delete_item(
    State(state): State<Arc<AppState>>,
    ValidItemId(id): ValidItemId,
) -> Result<Json<DeleteResponse>, ApiError> {
    ItemRepo::new(&state.pool).delete(id).await?;
    tracing::info!(%id, "item deleted");

    Ok(Json(DeleteResponse {
        message: "Item deleted",
    }))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}
