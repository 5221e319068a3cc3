//! Repository for the `deliveries` table.

use orchard_core::types::DbId;
use sqlx::PgPool;

use crate::models::delivery::{CreateDelivery, Delivery, UpdateDelivery};

const COLUMNS: &str = "id, from_warehouse_id, to_location_id, fruit_id, quantity, \
                       delivery_date, estimated_arrival_date, status";

/// Provides CRUD operations for delivery shipments.
pub struct DeliveryRepo;

impl DeliveryRepo {
    /// Insert a new delivery, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDelivery) -> Result<Delivery, sqlx::Error> {
        let query = format!(
            "INSERT INTO deliveries
                (from_warehouse_id, to_location_id, fruit_id, quantity,
                 delivery_date, estimated_arrival_date, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Delivery>(&query)
            .bind(input.from_warehouse_id)
            .bind(input.to_location_id)
            .bind(input.fruit_id)
            .bind(input.quantity)
            .bind(input.delivery_date)
            .bind(input.estimated_arrival_date)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a delivery by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Delivery>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM deliveries WHERE id = $1");
        sqlx::query_as::<_, Delivery>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all deliveries ordered by delivery date, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Delivery>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM deliveries ORDER BY delivery_date DESC, id DESC");
        sqlx::query_as::<_, Delivery>(&query).fetch_all(pool).await
    }

    /// Update a delivery. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDelivery,
    ) -> Result<Option<Delivery>, sqlx::Error> {
        let query = format!(
            "UPDATE deliveries SET
                from_warehouse_id = COALESCE($2, from_warehouse_id),
                to_location_id = COALESCE($3, to_location_id),
                fruit_id = COALESCE($4, fruit_id),
                quantity = COALESCE($5, quantity),
                delivery_date = COALESCE($6, delivery_date),
                estimated_arrival_date = COALESCE($7, estimated_arrival_date),
                status = COALESCE($8, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Delivery>(&query)
            .bind(id)
            .bind(input.from_warehouse_id)
            .bind(input.to_location_id)
            .bind(input.fruit_id)
            .bind(input.quantity)
            .bind(input.delivery_date)
            .bind(input.estimated_arrival_date)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a delivery. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM deliveries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
