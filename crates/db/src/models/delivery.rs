//! Delivery shipment entity model and DTOs.

use chrono::NaiveDate;
use orchard_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A shipment moving fruit from a warehouse to a location.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub id: DbId,
    pub from_warehouse_id: Option<DbId>,
    pub to_location_id: Option<DbId>,
    pub fruit_id: Option<DbId>,
    pub quantity: i32,
    pub delivery_date: NaiveDate,
    pub estimated_arrival_date: Option<NaiveDate>,
    pub status: String,
}

/// DTO for inserting a new delivery.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDelivery {
    pub from_warehouse_id: Option<DbId>,
    pub to_location_id: Option<DbId>,
    pub fruit_id: Option<DbId>,
    pub quantity: i32,
    pub delivery_date: NaiveDate,
    pub estimated_arrival_date: Option<NaiveDate>,
    pub status: String,
}

/// DTO for updating a delivery. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDelivery {
    pub from_warehouse_id: Option<DbId>,
    pub to_location_id: Option<DbId>,
    pub fruit_id: Option<DbId>,
    pub quantity: Option<i32>,
    pub delivery_date: Option<NaiveDate>,
    pub estimated_arrival_date: Option<NaiveDate>,
    pub status: Option<String>,
}
