//! Repository for the `fruits` table.

use orchard_core::types::DbId;
use sqlx::PgPool;

use crate::models::fruit::{CreateFruit, Fruit, UpdateFruit};

const COLUMNS: &str = "id, name, origin_country_id, price, image_url";

/// Provides CRUD operations for the fruit catalog.
pub struct FruitRepo;

impl FruitRepo {
    /// Insert a new fruit, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFruit) -> Result<Fruit, sqlx::Error> {
        let query = format!(
            "INSERT INTO fruits (name, origin_country_id, price, image_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Fruit>(&query)
            .bind(&input.name)
            .bind(input.origin_country_id)
            .bind(input.price)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a fruit by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Fruit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fruits WHERE id = $1");
        sqlx::query_as::<_, Fruit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the full catalog ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Fruit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fruits ORDER BY id");
        sqlx::query_as::<_, Fruit>(&query).fetch_all(pool).await
    }

    /// Update a fruit. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFruit,
    ) -> Result<Option<Fruit>, sqlx::Error> {
        let query = format!(
            "UPDATE fruits SET
                name = COALESCE($2, name),
                origin_country_id = COALESCE($3, origin_country_id),
                price = COALESCE($4, price),
                image_url = COALESCE($5, image_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Fruit>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.origin_country_id)
            .bind(input.price)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a fruit. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM fruits WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
