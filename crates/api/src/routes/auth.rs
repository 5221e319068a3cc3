//! Session check and logout routes -- mounted at `/auth`.
//!
//! Login lives under `/staff` (see [`crate::routes::staff`]), matching the
//! paths the console calls.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/check", get(auth::check))
        .route("/logout", post(auth::logout))
}
