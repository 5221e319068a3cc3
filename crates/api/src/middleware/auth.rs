//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use orchard_core::error::CoreError;

use crate::auth::session::{session_token_from_headers, validate_session_token};
use crate::error::AppError;
use crate::state::AppState;

/// Logged-in staff member extracted from the session cookie.
///
/// Use this as an extractor parameter in any handler that requires a
/// session:
///
/// ```ignore
/// async fn my_handler(staff: SessionStaff) -> AppResult<Json<()>> {
///     tracing::info!(email = %staff.email, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SessionStaff {
    /// The staff member's email (from `claims.sub`).
    pub email: String,
}

impl FromRequestParts<AppState> for SessionStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token_from_headers(&parts.headers).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Not logged in".into()))
        })?;

        let claims = validate_session_token(token, &state.config.session).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
        })?;

        Ok(SessionStaff { email: claims.sub })
    }
}
