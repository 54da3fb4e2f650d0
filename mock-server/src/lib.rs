//! In-memory stand-in for the remote item store.
//!
//! Serves the item collection at `/api/items` with list, create, update and
//! delete. Items keep their creation order.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const ITEMS_PATH: &str = "/api/items";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
}

#[derive(Deserialize)]
pub struct ItemInput {
    pub name: String,
}

impl ItemInput {
    /// The trimmed name, or 400 when nothing is left.
    fn validated(self) -> Result<String, StatusCode> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(StatusCode::BAD_REQUEST);
        }
        Ok(name.to_string())
    }
}

pub type Db = Arc<RwLock<Vec<Item>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route(ITEMS_PATH, get(list_items).post(create_item))
        .route("/api/items/{id}", put(update_item).delete(delete_item))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    Json(db.read().await.clone())
}

async fn create_item(
    State(db): State<Db>,
    Json(input): Json<ItemInput>,
) -> Result<(StatusCode, Json<Item>), StatusCode> {
    let item = Item {
        id: Uuid::new_v4(),
        name: input.validated()?,
    };
    tracing::info!(id = %item.id, name = %item.name, "item created");
    db.write().await.push(item.clone());
    Ok((StatusCode::CREATED, Json(item)))
}

async fn update_item(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<ItemInput>,
) -> Result<Json<Item>, StatusCode> {
    let name = input.validated()?;
    let mut items = db.write().await;
    let item = items.iter_mut().find(|i| i.id == id).ok_or(StatusCode::NOT_FOUND)?;
    item.name = name;
    tracing::info!(%id, name = %item.name, "item updated");
    Ok(Json(item.clone()))
}

async fn delete_item(State(db): State<Db>, Path(id): Path<Uuid>) -> StatusCode {
    let mut items = db.write().await;
    let before = items.len();
    items.retain(|i| i.id != id);
    if items.len() == before {
        return StatusCode::NOT_FOUND;
    }
    tracing::info!(%id, "item deleted");
    StatusCode::NO_CONTENT
}
