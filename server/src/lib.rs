//! HTTP host for the list store.
//!
//! One `ListStore` is created by the caller and shared with every handler
//! through router state. Each handler holds the store lock for the whole
//! store call.

pub mod config;
pub mod logging;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use list_store::{ListItem, ListItemInput, ListItemPatch, ListStore, StoreError};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

/// Request payload for bulk placeholder generation.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateItems {
    pub count: usize,
}

pub type SharedStore = Arc<RwLock<ListStore>>;

pub fn shared(store: ListStore) -> SharedStore {
    Arc::new(RwLock::new(store))
}

pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/generate", post(generate_items))
        .route(
            "/items/{id}",
            get(get_item)
                .put(update_item)
                .patch(update_item)
                .delete(delete_item),
        )
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

fn status_for(err: StoreError) -> StatusCode {
    debug!(%err, "store lookup failed");
    match err {
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
    }
}

async fn list_items(State(store): State<SharedStore>) -> Json<Vec<ListItem>> {
    let store = store.read().await;
    Json(store.get_all())
}

async fn create_item(
    State(store): State<SharedStore>,
    Json(input): Json<ListItemInput>,
) -> (StatusCode, Json<ListItem>) {
    let item = store.write().await.create(input);
    (StatusCode::CREATED, Json(item))
}

async fn generate_items(
    State(store): State<SharedStore>,
    Json(input): Json<GenerateItems>,
) -> (StatusCode, Json<Vec<ListItem>>) {
    let items = store.write().await.create_many(input.count);
    (StatusCode::CREATED, Json(items))
}

async fn get_item(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
) -> Result<Json<ListItem>, StatusCode> {
    let store = store.read().await;
    store.get_by_id(id).map(Json).map_err(status_for)
}

async fn update_item(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
    Json(patch): Json<ListItemPatch>,
) -> Result<Json<ListItem>, StatusCode> {
    let mut store = store.write().await;
    store.update_by_id(id, patch).map(Json).map_err(status_for)
}

async fn delete_item(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
) -> Result<Json<ListItem>, StatusCode> {
    let mut store = store.write().await;
    store.delete_by_id(id).map(Json).map_err(status_for)
}
