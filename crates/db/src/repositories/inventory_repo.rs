//! Repository for the `inventory` table.

use orchard_core::types::DbId;
use sqlx::PgPool;

use crate::models::inventory::{CreateInventory, Inventory, UpdateInventory};

const COLUMNS: &str = "id, fruit_id, location_id, quantity";

/// Provides CRUD operations for inventory counts.
pub struct InventoryRepo;

impl InventoryRepo {
    /// Insert a new inventory row, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateInventory) -> Result<Inventory, sqlx::Error> {
        let query = format!(
            "INSERT INTO inventory (fruit_id, location_id, quantity)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inventory>(&query)
            .bind(input.fruit_id)
            .bind(input.location_id)
            .bind(input.quantity)
            .fetch_one(pool)
            .await
    }

    /// Find an inventory row by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Inventory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventory WHERE id = $1");
        sqlx::query_as::<_, Inventory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all inventory rows ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Inventory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventory ORDER BY id");
        sqlx::query_as::<_, Inventory>(&query).fetch_all(pool).await
    }

    /// Update an inventory row. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInventory,
    ) -> Result<Option<Inventory>, sqlx::Error> {
        let query = format!(
            "UPDATE inventory SET
                fruit_id = COALESCE($2, fruit_id),
                location_id = COALESCE($3, location_id),
                quantity = COALESCE($4, quantity)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inventory>(&query)
            .bind(id)
            .bind(input.fruit_id)
            .bind(input.location_id)
            .bind(input.quantity)
            .fetch_optional(pool)
            .await
    }

    /// Delete an inventory row. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inventory WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
