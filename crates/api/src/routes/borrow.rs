//! Borrow routes -- mounted at `/borrows`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::borrow;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(borrow::list))
        .route("/insert", post(borrow::insert))
        .route("/{id}", put(borrow::update))
}
