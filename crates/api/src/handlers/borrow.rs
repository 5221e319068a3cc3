//! Handlers for the `/borrows` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use orchard_core::error::CoreError;
use orchard_core::types::DbId;
use orchard_db::models::borrow::{CreateBorrow, UpdateBorrow};
use orchard_db::repositories::BorrowRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::SessionStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /borrows
pub async fn list(
    State(state): State<AppState>,
    _session: SessionStaff,
) -> AppResult<impl IntoResponse> {
    let items = BorrowRepo::list(&state.pool).await?;
    tracing::debug!(count = items.len(), "Listed borrows");
    Ok(Json(DataResponse { data: items }))
}

/// POST /borrows/insert
pub async fn insert(
    State(state): State<AppState>,
    _session: SessionStaff,
    Json(body): Json<CreateBorrow>,
) -> AppResult<impl IntoResponse> {
    if body.quantity <= 0 {
        return Err(AppError::Core(CoreError::Validation(
            "Quantity must be positive".into(),
        )));
    }

    let created = BorrowRepo::create(&state.pool, &body).await?;
    tracing::info!(id = created.id, "Borrow created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// PUT /borrows/{id}
///
/// Partial update; the usual edit is marking a borrow returned and setting
/// the return date.
pub async fn update(
    State(state): State<AppState>,
    _session: SessionStaff,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateBorrow>,
) -> AppResult<impl IntoResponse> {
    if let Some(quantity) = body.quantity {
        if quantity <= 0 {
            return Err(AppError::Core(CoreError::Validation(
                "Quantity must be positive".into(),
            )));
        }
    }

    let updated = BorrowRepo::update(&state.pool, id, &body).await?.ok_or(
        AppError::Core(CoreError::NotFound {
            entity: "Borrow",
            id,
        }),
    )?;
    tracing::info!(id = updated.id, returned = updated.is_returned, "Borrow updated");
    Ok(Json(DataResponse { data: updated }))
}
