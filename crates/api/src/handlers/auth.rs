//! Handlers for login, session check, and logout.

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use orchard_core::error::CoreError;
use orchard_db::repositories::StaffRepo;
use serde::{Deserialize, Serialize};

use crate::auth::google::verify_credential;
use crate::auth::password::verify_password;
use crate::auth::session::{
    clear_session_cookie, generate_session_token, session_cookie, session_email_from_headers,
};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /staff/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /staff/google-login`.
#[derive(Debug, Deserialize)]
pub struct GoogleLoginRequest {
    pub credential: String,
}

/// Successful login response. Failures use the error envelope, which also
/// carries `success: false`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub email: String,
    pub name: String,
    pub job: String,
}

/// Response for `GET /auth/check`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub is_logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /staff/login
///
/// Authenticate with email + password. On success, installs the session
/// cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    // 1. Find the staff member by email.
    let staff = StaffRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    // 2. Deactivated accounts cannot log in.
    if !staff.status {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    // 3. Verify the password.
    let password_valid = verify_password(&input.password, &staff.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    tracing::info!(staff_id = staff.id, email = %staff.email, "Staff logged in");
    session_response(&state, staff)
}

/// POST /staff/google-login
///
/// Authenticate with a Google ID-token credential. The account must already
/// exist; staff are provisioned by admins, not by first login.
pub async fn google_login(
    State(state): State<AppState>,
    Json(input): Json<GoogleLoginRequest>,
) -> AppResult<impl IntoResponse> {
    let Some(client_id) = state.config.google_client_id.as_deref() else {
        // The diagnostic stays in the log; the response body is generic.
        return Err(AppError::InternalError(
            "GOOGLE_CLIENT_ID is not configured; Google login unavailable".into(),
        ));
    };

    let email = verify_credential(&state.http, &input.credential, client_id).await?;

    let staff = StaffRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "No staff account for this Google account".into(),
            ))
        })?;

    if !staff.status {
        return Err(AppError::Core(CoreError::Unauthorized(
            "No staff account for this Google account".into(),
        )));
    }

    tracing::info!(staff_id = staff.id, email = %staff.email, "Staff logged in via Google");
    session_response(&state, staff)
}

/// GET /auth/check
///
/// Report whether the request carries a valid session. Never fails: an
/// absent or invalid cookie is simply `isLoggedIn: false`.
pub async fn check(State(state): State<AppState>, headers: HeaderMap) -> Json<CheckResponse> {
    let email = session_email_from_headers(&headers, &state.config.session);
    Json(CheckResponse {
        is_logged_in: email.is_some(),
        email,
    })
}

/// POST /auth/logout
///
/// Clear the session cookie. The token is stateless, so there is nothing
/// to revoke server-side.
pub async fn logout() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::SET_COOKIE, clear_session_cookie())],
        Json(serde_json::json!({ "success": true })),
    )
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate a session token for the staff member and build the login
/// response with its `Set-Cookie` header.
fn session_response(
    state: &AppState,
    staff: orchard_db::models::staff::Staff,
) -> AppResult<impl IntoResponse> {
    let token = generate_session_token(&staff.email, &state.config.session)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let cookie = session_cookie(&token, &state.config.session);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            success: true,
            email: staff.email,
            name: staff.name,
            job: staff.job,
        }),
    ))
}
