//! Staff entity model and DTOs.

use orchard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full staff row from the `staff` table.
///
/// Contains the password hash -- never serialize this to API responses.
/// Use [`StaffResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Staff {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub job: String,
    pub location_id: Option<DbId>,
    pub status: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe staff representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub job: String,
    pub location_id: Option<DbId>,
    pub status: bool,
}

impl From<Staff> for StaffResponse {
    fn from(staff: Staff) -> Self {
        Self {
            id: staff.id,
            name: staff.name,
            email: staff.email,
            phone: staff.phone,
            job: staff.job,
            location_id: staff.location_id,
            status: staff.status,
        }
    }
}

/// DTO for inserting a new staff row. The password arrives pre-hashed.
#[derive(Debug, Clone)]
pub struct CreateStaff {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub job: String,
    pub location_id: Option<DbId>,
    pub status: bool,
}

/// DTO for updating a staff row. All fields are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaff {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(skip)]
    pub password_hash: Option<String>,
    pub phone: Option<String>,
    pub job: Option<String>,
    pub location_id: Option<DbId>,
    pub status: Option<bool>,
}
