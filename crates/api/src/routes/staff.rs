//! Staff routes -- mounted at `/staff`.
//!
//! ```text
//! POST   /login            login (public)
//! POST   /google-login     Google login (public)
//! GET    /                 list
//! POST   /                 bulk insert
//! GET    /{id}             get_by_id
//! PUT    /{id}             update
//! DELETE /{id}             delete
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, staff};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/google-login", post(auth::google_login))
        .route("/", get(staff::list).post(staff::create))
        .route(
            "/{id}",
            get(staff::get_by_id)
                .put(staff::update)
                .delete(staff::delete),
        )
}
