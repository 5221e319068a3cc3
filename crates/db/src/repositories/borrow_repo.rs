//! Repository for the `borrows` table.

use orchard_core::types::DbId;
use sqlx::PgPool;

use crate::models::borrow::{Borrow, CreateBorrow, UpdateBorrow};

const COLUMNS: &str = "id, from_shop_id, to_shop_id, fruit_id, quantity, \
                       borrow_date, return_date, is_returned";

/// Provides CRUD operations for inter-shop borrows.
pub struct BorrowRepo;

impl BorrowRepo {
    /// Insert a new borrow, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBorrow) -> Result<Borrow, sqlx::Error> {
        let query = format!(
            "INSERT INTO borrows
                (from_shop_id, to_shop_id, fruit_id, quantity, borrow_date, return_date, is_returned)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Borrow>(&query)
            .bind(input.from_shop_id)
            .bind(input.to_shop_id)
            .bind(input.fruit_id)
            .bind(input.quantity)
            .bind(input.borrow_date)
            .bind(input.return_date)
            .bind(input.is_returned)
            .fetch_one(pool)
            .await
    }

    /// Find a borrow by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Borrow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM borrows WHERE id = $1");
        sqlx::query_as::<_, Borrow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all borrows ordered by borrow date, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Borrow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM borrows ORDER BY borrow_date DESC, id DESC");
        sqlx::query_as::<_, Borrow>(&query).fetch_all(pool).await
    }

    /// Update a borrow. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBorrow,
    ) -> Result<Option<Borrow>, sqlx::Error> {
        let query = format!(
            "UPDATE borrows SET
                from_shop_id = COALESCE($2, from_shop_id),
                to_shop_id = COALESCE($3, to_shop_id),
                fruit_id = COALESCE($4, fruit_id),
                quantity = COALESCE($5, quantity),
                borrow_date = COALESCE($6, borrow_date),
                return_date = COALESCE($7, return_date),
                is_returned = COALESCE($8, is_returned)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Borrow>(&query)
            .bind(id)
            .bind(input.from_shop_id)
            .bind(input.to_shop_id)
            .bind(input.fruit_id)
            .bind(input.quantity)
            .bind(input.borrow_date)
            .bind(input.return_date)
            .bind(input.is_returned)
            .fetch_optional(pool)
            .await
    }

    /// Delete a borrow. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM borrows WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
