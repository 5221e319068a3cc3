//! Inter-shop borrow entity model and DTOs.

use chrono::NaiveDate;
use orchard_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A peer-to-peer inventory loan between two shop locations.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Borrow {
    pub id: DbId,
    pub from_shop_id: Option<DbId>,
    pub to_shop_id: Option<DbId>,
    pub fruit_id: Option<DbId>,
    pub quantity: i32,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub is_returned: bool,
}

/// DTO for inserting a new borrow.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBorrow {
    pub from_shop_id: Option<DbId>,
    pub to_shop_id: Option<DbId>,
    pub fruit_id: Option<DbId>,
    pub quantity: i32,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_returned: bool,
}

/// DTO for updating a borrow. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBorrow {
    pub from_shop_id: Option<DbId>,
    pub to_shop_id: Option<DbId>,
    pub fruit_id: Option<DbId>,
    pub quantity: Option<i32>,
    pub borrow_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub is_returned: Option<bool>,
}
