//! Fruit catalog entity model and DTOs.

use orchard_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A fruit catalog entry.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fruit {
    pub id: DbId,
    pub name: String,
    pub origin_country_id: Option<DbId>,
    pub price: f64,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
}

/// DTO for inserting a new fruit.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFruit {
    pub name: String,
    pub origin_country_id: Option<DbId>,
    pub price: f64,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
}

/// DTO for updating a fruit. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFruit {
    pub name: Option<String>,
    pub origin_country_id: Option<DbId>,
    pub price: Option<f64>,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
}
