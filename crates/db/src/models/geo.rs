//! Country and city reference models.

use orchard_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A country reference row.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: DbId,
    pub name: String,
}

/// A city reference row.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: DbId,
    pub country_id: Option<DbId>,
    pub name: String,
}

/// DTO for inserting a country.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCountry {
    pub name: String,
}

/// DTO for inserting a city.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCity {
    pub country_id: Option<DbId>,
    pub name: String,
}
