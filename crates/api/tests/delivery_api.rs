//! HTTP-level integration tests for delivery CRUD, the joined list, and the
//! monthly yield report.

mod common;

use axum::http::StatusCode;
use common::{authenticated_session, body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use orchard_db::models::fruit::CreateFruit;
use orchard_db::models::location::CreateLocation;
use orchard_db::repositories::{FruitRepo, LocationRepo};
use sqlx::PgPool;

async fn seed_fruit(pool: &PgPool, name: &str) -> i64 {
    FruitRepo::create(
        pool,
        &CreateFruit {
            name: name.to_string(),
            origin_country_id: None,
            price: 1.8,
            image_url: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_location(pool: &PgPool, address: &str, location_type: &str) -> i64 {
    LocationRepo::create(
        pool,
        &CreateLocation {
            city_id: None,
            address: address.to_string(),
            location_type: location_type.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

fn delivery_body(
    fruit_id: Option<i64>,
    quantity: i32,
    date: &str,
    status: &str,
) -> serde_json::Value {
    serde_json::json!({
        "fromWarehouseId": null,
        "toLocationId": null,
        "fruitId": fruit_id,
        "quantity": quantity,
        "deliveryDate": date,
        "estimatedArrivalDate": null,
        "status": status
    })
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn insert_rejects_unknown_status(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = authenticated_session(app.clone(), &pool).await;

    let response = post_json_auth(
        app,
        "/deliveries/insert",
        delivery_body(None, 5, "2024-03-10", "Shipped"),
        &cookie,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn joined_list_attaches_names(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = authenticated_session(app.clone(), &pool).await;
    let fruit_id = seed_fruit(&pool, "Apple").await;
    let warehouse_id = seed_location(&pool, "Central Warehouse", "warehouse").await;
    let shop_id = seed_location(&pool, "9 Market Street", "shop").await;

    let response = post_json_auth(
        app.clone(),
        "/deliveries/insert",
        serde_json::json!({
            "fromWarehouseId": warehouse_id,
            "toLocationId": shop_id,
            "fruitId": fruit_id,
            "quantity": 30,
            "deliveryDate": "2024-05-02",
            "estimatedArrivalDate": "2024-05-04",
            "status": "In Transit"
        }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_auth(app, "/deliveries/list", &cookie).await;
    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["fruitName"], "Apple");
    assert_eq!(rows[0]["fromWarehouseName"], "Central Warehouse");
    assert_eq!(rows[0]["toLocationName"], "9 Market Street");
    assert_eq!(rows[0]["status"], "In Transit");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_and_delete_paths(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = authenticated_session(app.clone(), &pool).await;
    let fruit_id = seed_fruit(&pool, "Apple").await;

    let response = post_json_auth(
        app.clone(),
        "/deliveries/insert",
        delivery_body(Some(fruit_id), 10, "2024-03-10", "Pending"),
        &cookie,
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/deliveries/update/{id}"),
        serde_json::json!({ "status": "Delivered" }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "Delivered");
    assert_eq!(json["data"]["quantity"], 10);

    let response = delete_auth(app.clone(), &format!("/deliveries/delete/{id}"), &cookie).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(app, &format!("/deliveries/delete/{id}"), &cookie).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn report_requires_a_session(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/deliveries/report").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn report_buckets_delivered_quantity_by_month_and_fruit(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = authenticated_session(app.clone(), &pool).await;
    let apple = seed_fruit(&pool, "Apple").await;

    post_json_auth(
        app.clone(),
        "/deliveries/insert",
        delivery_body(Some(apple), 5, "2024-03-10", "Delivered"),
        &cookie,
    )
    .await;

    let response = get_auth(app, "/deliveries/report", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["monthlyData"]["March"]["apple"], 5);
    assert_eq!(json["summary"]["totalDeliveries"], 1);
    assert_eq!(json["summary"]["deliveredCount"], 1);
    assert_eq!(json["summary"]["totalFruits"], 1);
    assert_eq!(json["fruits"][0]["name"], "Apple");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn report_contains_all_twelve_months_even_when_empty(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = authenticated_session(app.clone(), &pool).await;

    let response = get_auth(app, "/deliveries/report", &cookie).await;
    let json = body_json(response).await;

    let months = json["monthlyData"].as_object().unwrap();
    assert_eq!(months.len(), 12);
    for name in [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ] {
        let bucket = months.get(name).unwrap().as_object().unwrap();
        assert!(bucket.is_empty(), "{name} should be an empty object");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn report_excludes_non_delivered_shipments(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = authenticated_session(app.clone(), &pool).await;
    let apple = seed_fruit(&pool, "Apple").await;

    for status in ["Pending", "In Transit", "Cancelled"] {
        post_json_auth(
            app.clone(),
            "/deliveries/insert",
            delivery_body(Some(apple), 10, "2024-03-10", status),
            &cookie,
        )
        .await;
    }

    let response = get_auth(app, "/deliveries/report", &cookie).await;
    let json = body_json(response).await;

    assert!(json["monthlyData"]["March"].as_object().unwrap().is_empty());
    assert_eq!(json["summary"]["totalDeliveries"], 3);
    assert_eq!(json["summary"]["deliveredCount"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn report_silently_skips_deliveries_of_unknown_fruits(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = authenticated_session(app.clone(), &pool).await;
    let apple = seed_fruit(&pool, "Apple").await;

    post_json_auth(
        app.clone(),
        "/deliveries/insert",
        delivery_body(Some(apple), 5, "2024-03-10", "Delivered"),
        &cookie,
    )
    .await;
    // No fruit row with id 999 exists.
    post_json_auth(
        app.clone(),
        "/deliveries/insert",
        delivery_body(Some(999), 7, "2024-03-11", "Delivered"),
        &cookie,
    )
    .await;

    let response = get_auth(app, "/deliveries/report", &cookie).await;
    let json = body_json(response).await;

    // The unknown fruit counts as a delivery but adds nothing to any bucket.
    assert_eq!(json["summary"]["totalDeliveries"], 2);
    assert_eq!(json["summary"]["deliveredCount"], 2);
    let march = json["monthlyData"]["March"].as_object().unwrap();
    assert_eq!(march.len(), 1);
    assert_eq!(march["apple"], 5);
}
