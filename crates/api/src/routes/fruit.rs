//! Fruit catalog routes -- mounted at `/fruits`.

use axum::routing::get;
use axum::Router;

use crate::handlers::fruit;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fruit::list).post(fruit::create))
        .route(
            "/{id}",
            get(fruit::get_by_id)
                .put(fruit::update)
                .delete(fruit::delete),
        )
}
