//! Inventory routes -- mounted at `/inventory`.
//!
//! ```text
//! GET    /                 raw list
//! POST   /                 insert
//! GET    /list             joined list
//! PUT    /update/{id}      update
//! DELETE /{id}             delete
//! ```

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::inventory;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(inventory::list).post(inventory::create))
        .route("/list", get(inventory::list_joined))
        .route("/update/{id}", put(inventory::update))
        .route("/{id}", delete(inventory::delete))
}
