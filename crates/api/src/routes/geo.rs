//! Geographic reference routes -- `/countries` and `/cities`.

use axum::routing::get;
use axum::Router;

use crate::handlers::geo;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/countries", get(geo::list_countries))
        .route("/cities", get(geo::list_cities))
}
