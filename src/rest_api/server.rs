//! # REST API HTTP Server
//!
//! Axum routes for the item collection.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::store::{ItemStore, NewItem};

use super::errors::{RestError, RestResult};
use super::parser::QueryParams;
use super::response::{Encoded, Format};

/// Shared state type
pub type ItemsState = Arc<ItemStore>;

/// Decoded query string, or why it could not be decoded
type RawQuery = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// REST API server for the item collection
pub struct RestServer {
    store: ItemsState,
}

impl RestServer {
    pub fn new(store: ItemsState) -> Self {
        Self { store }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        Router::new()
            .route("/items", get(list_handler).post(create_handler))
            .route("/items/", get(list_handler).post(create_handler))
            .route("/items/:id", get(get_handler).delete(delete_handler))
            .with_state(self.store)
    }
}

/// Validate the query string of a request
fn parse_query(query: RawQuery) -> RestResult<QueryParams> {
    let Query(raw) = query.map_err(|e| RestError::InvalidQueryParam(e.body_text()))?;
    QueryParams::parse(&raw)
}

/// List items handler
async fn list_handler(
    State(store): State<ItemsState>,
    query: RawQuery,
) -> RestResult<Response> {
    let params = parse_query(query)?;

    let mut items = store.list()?;
    if items.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    params.sort.apply(&mut items);
    Ok(Encoded::ok(params.format, &items)?.into_response())
}

/// Create item handler
///
/// The body is decoded as JSON whatever the request's content type.
async fn create_handler(State(store): State<ItemsState>, body: Bytes) -> RestResult<Encoded> {
    let candidate: NewItem =
        serde_json::from_slice(&body).map_err(|e| RestError::InvalidBody(e.to_string()))?;

    let item = store.create(candidate)?;
    tracing::info!(id = %item.id, "item added");

    Encoded::new(StatusCode::CREATED, Format::Json, &item)
}

/// Get single item handler
async fn get_handler(
    State(store): State<ItemsState>,
    Path(id): Path<String>,
    query: RawQuery,
) -> RestResult<Encoded> {
    let params = parse_query(query)?;

    let item = store.get(&id)?;
    Encoded::ok(params.format, &item)
}

/// Delete item handler
async fn delete_handler(
    State(store): State<ItemsState>,
    Path(id): Path<String>,
) -> RestResult<StatusCode> {
    let item = store.delete(&id)?;
    tracing::info!(id = %item.id, "item deleted");

    Ok(StatusCode::OK)
}
