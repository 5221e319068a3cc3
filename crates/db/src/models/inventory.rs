//! Inventory entity model and DTOs.

use orchard_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Quantity-on-hand of a fruit at a location.
///
/// One row per (fruit, location) pair by convention; the schema does not
/// enforce it.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub id: DbId,
    pub fruit_id: Option<DbId>,
    pub location_id: Option<DbId>,
    pub quantity: i32,
}

/// DTO for inserting a new inventory row.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventory {
    pub fruit_id: Option<DbId>,
    pub location_id: Option<DbId>,
    pub quantity: i32,
}

/// DTO for updating an inventory row. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInventory {
    pub fruit_id: Option<DbId>,
    pub location_id: Option<DbId>,
    pub quantity: Option<i32>,
}
