//! Delivery routes -- mounted at `/deliveries`.
//!
//! ```text
//! GET    /list             joined list
//! POST   /insert           insert
//! PUT    /update/{id}      update
//! DELETE /delete/{id}      delete
//! GET    /report           monthly yield report
//! ```

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::delivery;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", get(delivery::list_joined))
        .route("/insert", post(delivery::insert))
        .route("/update/{id}", put(delivery::update))
        .route("/delete/{id}", delete(delivery::delete))
        .route("/report", get(delivery::report))
}
