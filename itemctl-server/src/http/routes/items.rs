//! Item endpoints - everything lives on `/`

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{Method, StatusCode},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::repos::ItemRow;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{CreateItemRequest, NewItem};

/// Item as rendered by GET
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: String,
    pub title: String,
    pub explanation: String,
    pub time: String,
    pub category: String,
    pub tag: String,
}

impl From<ItemRow> for ItemResponse {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            explanation: row.explanation,
            time: row.time.to_rfc3339(),
            category: row.category,
            tag: row.tag,
        }
    }
}

/// POST response
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// GET / - list every item with category and curriculum resolved
async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let rows = state.items.list_items().await.map_err(ApiError::Database)?;
    Ok(Json(rows.into_iter().map(ItemResponse::from).collect()))
}

/// POST / - create an item
async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let Json(req) = payload?;
    let item = NewItem::try_from(req)?;
    let id = state
        .items
        .create_item(item)
        .await
        .map_err(ApiError::from_insert)?;

    Ok(Json(CreatedResponse { id }))
}

/// OPTIONS / - CORS preflight; headers come from the CORS layers
async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Anything else on `/`, HEAD included
async fn unsupported_method(method: Method) -> ApiError {
    ApiError::UnsupportedMethod {
        method: method.to_string(),
    }
}

/// Item routes
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(list_items)
            .post(create_item)
            .options(preflight)
            // Registered explicitly; otherwise HEAD falls through to the GET handler
            .head(unsupported_method)
            .fallback(unsupported_method),
    )
}
