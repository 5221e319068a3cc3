//! Handlers for the `/fruits` catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use orchard_core::error::CoreError;
use orchard_core::types::DbId;
use orchard_db::models::fruit::{CreateFruit, UpdateFruit};
use orchard_db::repositories::FruitRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::SessionStaff;
use crate::response::DataResponse;
use crate::state::AppState;

fn validate_fruit_fields(name: Option<&str>, price: Option<f64>) -> Result<(), CoreError> {
    if let Some(name) = name {
        if name.trim().is_empty() {
            return Err(CoreError::Validation("Fruit name is required".into()));
        }
    }
    if let Some(price) = price {
        if price < 0.0 || !price.is_finite() {
            return Err(CoreError::Validation(format!("Invalid price {price}")));
        }
    }
    Ok(())
}

/// GET /fruits -- public reference data.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = FruitRepo::list(&state.pool).await?;
    tracing::debug!(count = items.len(), "Listed fruits");
    Ok(Json(DataResponse { data: items }))
}

/// POST /fruits
pub async fn create(
    State(state): State<AppState>,
    _session: SessionStaff,
    Json(body): Json<CreateFruit>,
) -> AppResult<impl IntoResponse> {
    validate_fruit_fields(Some(&body.name), Some(body.price))?;

    let created = FruitRepo::create(&state.pool, &body).await?;
    tracing::info!(id = created.id, name = %created.name, "Fruit created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /fruits/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let fruit = FruitRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Fruit", id }))?;
    Ok(Json(DataResponse { data: fruit }))
}

/// PUT /fruits/{id}
pub async fn update(
    State(state): State<AppState>,
    _session: SessionStaff,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateFruit>,
) -> AppResult<impl IntoResponse> {
    validate_fruit_fields(body.name.as_deref(), body.price)?;

    let updated = FruitRepo::update(&state.pool, id, &body)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Fruit", id }))?;
    tracing::info!(id = updated.id, "Fruit updated");
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /fruits/{id}
///
/// No cascading protection: inventory and delivery rows referencing this
/// fruit keep their ids and join to "Unknown Fruit" afterwards.
pub async fn delete(
    State(state): State<AppState>,
    _session: SessionStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FruitRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Fruit deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Fruit", id }))
    }
}
