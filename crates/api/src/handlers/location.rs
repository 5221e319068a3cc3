//! Handlers for the `/locations` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use orchard_core::error::CoreError;
use orchard_core::roles::validate_location_type;
use orchard_core::types::DbId;
use orchard_db::models::location::{CreateLocation, UpdateLocation};
use orchard_db::repositories::LocationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::SessionStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /locations -- public reference data.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = LocationRepo::list(&state.pool).await?;
    tracing::debug!(count = items.len(), "Listed locations");
    Ok(Json(DataResponse { data: items }))
}

/// POST /locations
pub async fn create(
    State(state): State<AppState>,
    _session: SessionStaff,
    Json(body): Json<CreateLocation>,
) -> AppResult<impl IntoResponse> {
    validate_location_type(&body.location_type)?;

    let created = LocationRepo::create(&state.pool, &body).await?;
    tracing::info!(id = created.id, "Location created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /locations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let location = LocationRepo::find_by_id(&state.pool, id).await?.ok_or(
        AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }),
    )?;
    Ok(Json(DataResponse { data: location }))
}

/// PUT /locations/{id}
pub async fn update(
    State(state): State<AppState>,
    _session: SessionStaff,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateLocation>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref location_type) = body.location_type {
        validate_location_type(location_type)?;
    }

    let updated = LocationRepo::update(&state.pool, id, &body).await?.ok_or(
        AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }),
    )?;
    tracing::info!(id = updated.id, "Location updated");
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /locations/{id}
pub async fn delete(
    State(state): State<AppState>,
    _session: SessionStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = LocationRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Location deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))
    }
}
