//! Warehouse/shop location entity model and DTOs.

use orchard_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A warehouse or shop address tied to a city.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: DbId,
    pub city_id: Option<DbId>,
    pub address: String,
    #[serde(rename = "type")]
    pub location_type: String,
}

/// DTO for inserting a new location.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocation {
    pub city_id: Option<DbId>,
    pub address: String,
    #[serde(rename = "type")]
    pub location_type: String,
}

/// DTO for updating a location. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocation {
    pub city_id: Option<DbId>,
    pub address: Option<String>,
    #[serde(rename = "type")]
    pub location_type: Option<String>,
}
