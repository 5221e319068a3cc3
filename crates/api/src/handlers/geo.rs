//! Handlers for the `/countries` and `/cities` reference tables.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use orchard_db::repositories::{CityRepo, CountryRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /countries -- public reference data.
pub async fn list_countries(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = CountryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /cities -- public reference data.
pub async fn list_cities(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = CityRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}
