//! Handlers for the `/deliveries` resource and the monthly yield report.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Datelike, NaiveDate, Utc};
use orchard_core::error::CoreError;
use orchard_core::join::{name_index, resolve_name, ENTITY_FRUIT, ENTITY_LOCATION};
use orchard_core::report::{build_monthly_report, DeliveryFact, FruitSummary, MonthlyReport};
use orchard_core::shipping::validate_delivery_status;
use orchard_core::types::DbId;
use orchard_db::models::delivery::{CreateDelivery, UpdateDelivery};
use orchard_db::repositories::{DeliveryRepo, FruitRepo, LocationRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::SessionStaff;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A delivery row enriched with display names.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryListItem {
    pub id: DbId,
    pub from_warehouse_id: Option<DbId>,
    pub to_location_id: Option<DbId>,
    pub fruit_id: Option<DbId>,
    pub quantity: i32,
    pub delivery_date: NaiveDate,
    pub estimated_arrival_date: Option<NaiveDate>,
    pub status: String,
    pub fruit_name: String,
    pub from_warehouse_name: String,
    pub to_location_name: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /deliveries/list
///
/// Deliveries enriched with fruit and location names, newest first.
pub async fn list_joined(
    State(state): State<AppState>,
    _session: SessionStaff,
) -> AppResult<impl IntoResponse> {
    let rows = DeliveryRepo::list(&state.pool).await?;
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

    let items: Vec<DeliveryListItem> = rows
        .into_iter()
        .map(|row| DeliveryListItem {
            fruit_name: resolve_name(&fruits, row.fruit_id, ENTITY_FRUIT),
            from_warehouse_name: resolve_name(&locations, row.from_warehouse_id, ENTITY_LOCATION),
            to_location_name: resolve_name(&locations, row.to_location_id, ENTITY_LOCATION),
            id: row.id,
            from_warehouse_id: row.from_warehouse_id,
            to_location_id: row.to_location_id,
            fruit_id: row.fruit_id,
            quantity: row.quantity,
            delivery_date: row.delivery_date,
            estimated_arrival_date: row.estimated_arrival_date,
            status: row.status,
        })
        .collect();

    tracing::debug!(count = items.len(), "Listed joined deliveries");
    Ok(Json(DataResponse { data: items }))
}

/// POST /deliveries/insert
pub async fn insert(
    State(state): State<AppState>,
    _session: SessionStaff,
    Json(body): Json<CreateDelivery>,
) -> AppResult<impl IntoResponse> {
    validate_delivery_status(&body.status)?;
    if body.quantity <= 0 {
        return Err(AppError::Core(CoreError::Validation(
            "Quantity must be positive".into(),
        )));
    }

    let created = DeliveryRepo::create(&state.pool, &body).await?;
    tracing::info!(id = created.id, status = %created.status, "Delivery created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// PUT /deliveries/update/{id}
pub async fn update(
    State(state): State<AppState>,
    _session: SessionStaff,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateDelivery>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = body.status {
        validate_delivery_status(status)?;
    }
    if let Some(quantity) = body.quantity {
        if quantity <= 0 {
            return Err(AppError::Core(CoreError::Validation(
                "Quantity must be positive".into(),
            )));
        }
    }

    let updated = DeliveryRepo::update(&state.pool, id, &body).await?.ok_or(
        AppError::Core(CoreError::NotFound {
            entity: "Delivery",
            id,
        }),
    )?;
    tracing::info!(id = updated.id, status = %updated.status, "Delivery updated");
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /deliveries/delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    _session: SessionStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DeliveryRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Delivery deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Delivery",
            id,
        }))
    }
}

/// GET /deliveries/report
///
/// Monthly yield report. Returns the fixed `{monthlyData, summary, fruits}`
/// shape the console's chart and table views consume -- no `data` envelope.
pub async fn report(
    State(state): State<AppState>,
    _session: SessionStaff,
) -> AppResult<Json<MonthlyReport>> {
    let deliveries: Vec<DeliveryFact> = DeliveryRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|d| DeliveryFact {
            fruit_id: d.fruit_id,
            quantity: d.quantity,
            delivery_date: d.delivery_date,
            status: d.status,
        })
        .collect();

    let fruits: Vec<FruitSummary> = FruitRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|f| FruitSummary {
            id: f.id,
            name: f.name,
            price: f.price,
            image_url: f.image_url,
        })
        .collect();

    let report = build_monthly_report(&deliveries, &fruits, Utc::now().year());
    tracing::debug!(
        total = report.summary.total_deliveries,
        delivered = report.summary.delivered_count,
        "Built monthly report"
    );
    Ok(Json(report))
}
