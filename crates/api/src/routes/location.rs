//! Location routes -- mounted at `/locations`.

use axum::routing::get;
use axum::Router;

use crate::handlers::location;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(location::list).post(location::create))
        .route(
            "/{id}",
            get(location::get_by_id)
                .put(location::update)
                .delete(location::delete),
        )
}
