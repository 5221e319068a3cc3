//! Handlers for the `/staff` resource.
//!
//! Staff are created through the admin console's bulk form, which posts an
//! array of accounts. Plaintext passwords arrive in the request body and
//! are hashed before they reach the repository.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use orchard_core::error::CoreError;
use orchard_core::roles::validate_job;
use orchard_core::types::DbId;
use orchard_db::models::staff::{CreateStaff, StaffResponse, UpdateStaff};
use orchard_db::repositories::StaffRepo;
use serde::Deserialize;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::SessionStaff;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// One staff account in the bulk-insert body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub job: String,
    pub location_id: Option<DbId>,
    #[serde(default = "default_status")]
    pub status: bool,
}

fn default_status() -> bool {
    true
}

/// Request body for `PUT /staff/{id}`. All fields optional; a present
/// `password` is re-hashed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaffRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub job: Option<String>,
    pub location_id: Option<DbId>,
    pub status: Option<bool>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Minimal email shape check; full validation belongs to the mail system.
fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.contains('@') && !email.starts_with('@') && !email.ends_with('@') {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Invalid email '{email}'")))
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /staff
///
/// List all staff accounts (without password hashes).
pub async fn list(
    State(state): State<AppState>,
    _session: SessionStaff,
) -> AppResult<impl IntoResponse> {
    let items: Vec<StaffResponse> = StaffRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(StaffResponse::from)
        .collect();
    tracing::debug!(count = items.len(), "Listed staff");
    Ok(Json(DataResponse { data: items }))
}

/// POST /staff
///
/// Bulk-insert staff accounts. Rows are inserted sequentially; the first
/// failure aborts the request and earlier rows stay inserted, matching the
/// console's row-by-row submission.
pub async fn create(
    State(state): State<AppState>,
    _session: SessionStaff,
    Json(body): Json<Vec<StaffInput>>,
) -> AppResult<impl IntoResponse> {
    if body.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "At least one staff account is required".into(),
        )));
    }

    let mut created = Vec::with_capacity(body.len());
    for input in &body {
        validate_email(&input.email)?;
        validate_job(&input.job)?;

        // Check-then-insert; the uq_staff_email constraint backstops the race.
        if StaffRepo::find_by_email(&state.pool, &input.email)
            .await?
            .is_some()
        {
            return Err(AppError::Core(CoreError::Duplicate(format!(
                "Staff with email '{}' already exists",
                input.email
            ))));
        }

        let password_hash = hash_password(&input.password)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

        let row = StaffRepo::create(
            &state.pool,
            &CreateStaff {
                name: input.name.clone(),
                email: input.email.clone(),
                password_hash,
                phone: input.phone.clone(),
                job: input.job.clone(),
                location_id: input.location_id,
                status: input.status,
            },
        )
        .await?;

        tracing::info!(id = row.id, email = %row.email, "Staff created");
        created.push(StaffResponse::from(row));
    }

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /staff/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _session: SessionStaff,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let staff = StaffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Staff", id }))?;
    Ok(Json(DataResponse {
        data: StaffResponse::from(staff),
    }))
}

/// PUT /staff/{id}
///
/// Admin edit or self-service profile edit. Only provided fields change.
pub async fn update(
    State(state): State<AppState>,
    _session: SessionStaff,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateStaffRequest>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref email) = body.email {
        validate_email(email)?;
    }
    if let Some(ref job) = body.job {
        validate_job(job)?;
    }

    let password_hash = match &body.password {
        Some(password) => Some(
            hash_password(password)
                .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?,
        ),
        None => None,
    };

    let input = UpdateStaff {
        name: body.name,
        email: body.email,
        password_hash,
        phone: body.phone,
        job: body.job,
        location_id: body.location_id,
        status: body.status,
    };

    let updated = StaffRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Staff", id }))?;
    tracing::info!(id = updated.id, "Staff updated");
    Ok(Json(DataResponse {
        data: StaffResponse::from(updated),
    }))
}

/// DELETE /staff/{id}
pub async fn delete(
    State(state): State<AppState>,
    _session: SessionStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = StaffRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Staff deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Staff", id }))
    }
}
