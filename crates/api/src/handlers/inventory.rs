//! Handlers for the `/inventory` resource.
//!
//! The `/inventory/list` view attaches fruit and location display names by
//! loading both reference tables and joining in memory -- the same walk the
//! console previously did client-side, done once at the API boundary.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use orchard_core::error::CoreError;
use orchard_core::join::{name_index, resolve_name, ENTITY_FRUIT, ENTITY_LOCATION};
use orchard_core::types::DbId;
use orchard_db::models::inventory::{CreateInventory, UpdateInventory};
use orchard_db::repositories::{FruitRepo, InventoryRepo, LocationRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::SessionStaff;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// An inventory row enriched with display names.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryListItem {
    pub id: DbId,
    pub fruit_id: Option<DbId>,
    pub location_id: Option<DbId>,
    pub quantity: i32,
    pub fruit_name: String,
    pub location_name: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /inventory
///
/// Raw rows without joined names.
pub async fn list(
    State(state): State<AppState>,
    _session: SessionStaff,
) -> AppResult<impl IntoResponse> {
    let items = InventoryRepo::list(&state.pool).await?;
    tracing::debug!(count = items.len(), "Listed inventory");
    Ok(Json(DataResponse { data: items }))
}

/// GET /inventory/list
///
/// Rows enriched with fruit and location names. Dangling references
/// resolve to "Unknown Fruit" / "Unknown Location".
pub async fn list_joined(
    State(state): State<AppState>,
    _session: SessionStaff,
) -> AppResult<impl IntoResponse> {
    let rows = InventoryRepo::list(&state.pool).await?;
    let fruits = name_index(
        FruitRepo::list(&state.pool)
            .await?
            .into_iter()
            .map(|f| (f.id, f.name)),
    );
    let locations = name_index(
        LocationRepo::list(&state.pool)
            .await?
            .into_iter()
            .map(|l| (l.id, l.address)),
    );

    let items: Vec<InventoryListItem> = rows
        .into_iter()
        .map(|row| InventoryListItem {
            fruit_name: resolve_name(&fruits, row.fruit_id, ENTITY_FRUIT),
            location_name: resolve_name(&locations, row.location_id, ENTITY_LOCATION),
            id: row.id,
            fruit_id: row.fruit_id,
            location_id: row.location_id,
            quantity: row.quantity,
        })
        .collect();

    tracing::debug!(count = items.len(), "Listed joined inventory");
    Ok(Json(DataResponse { data: items }))
}

/// POST /inventory
pub async fn create(
    State(state): State<AppState>,
    _session: SessionStaff,
    Json(body): Json<CreateInventory>,
) -> AppResult<impl IntoResponse> {
    if body.quantity < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "Quantity must not be negative".into(),
        )));
    }

    let created = InventoryRepo::create(&state.pool, &body).await?;
    tracing::info!(id = created.id, "Inventory row created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// PUT /inventory/update/{id}
pub async fn update(
    State(state): State<AppState>,
    _session: SessionStaff,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateInventory>,
) -> AppResult<impl IntoResponse> {
    if let Some(quantity) = body.quantity {
        if quantity < 0 {
            return Err(AppError::Core(CoreError::Validation(
                "Quantity must not be negative".into(),
            )));
        }
    }

    let updated = InventoryRepo::update(&state.pool, id, &body).await?.ok_or(
        AppError::Core(CoreError::NotFound {
            entity: "Inventory",
            id,
        }),
    )?;
    tracing::info!(id = updated.id, "Inventory row updated");
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /inventory/{id}
pub async fn delete(
    State(state): State<AppState>,
    _session: SessionStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = InventoryRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Inventory row deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Inventory",
            id,
        }))
    }
}
