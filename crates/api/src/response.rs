//! Shared response envelope types for API handlers.
//!
//! List and CRUD responses use a `{ "data": ... }` envelope. Auth endpoints
//! and the yield report return their own fixed shapes, which the console
//! consumes directly.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
