//! HTTP-level integration tests for inter-shop borrows.

mod common;

use axum::http::StatusCode;
use common::{authenticated_session, body_json, get_auth, post_json_auth, put_json_auth};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn insert_and_list_borrows(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = authenticated_session(app.clone(), &pool).await;

    let response = post_json_auth(
        app.clone(),
        "/borrows/insert",
        serde_json::json!({
            "fromShopId": 1,
            "toShopId": 2,
            "fruitId": null,
            "quantity": 15,
            "borrowDate": "2024-06-01",
            "returnDate": null
        }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    // A new borrow starts unreturned; the field is a real boolean, not text.
    assert_eq!(json["data"]["isReturned"], false);

    let response = get_auth(app, "/borrows", &cookie).await;
    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["quantity"], 15);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn marking_a_borrow_returned(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = authenticated_session(app.clone(), &pool).await;

    let response = post_json_auth(
        app.clone(),
        "/borrows/insert",
        serde_json::json!({
            "fromShopId": 1,
            "toShopId": 2,
            "fruitId": null,
            "quantity": 8,
            "borrowDate": "2024-06-01",
            "returnDate": null
        }),
        &cookie,
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = put_json_auth(
        app,
        &format!("/borrows/{id}"),
        serde_json::json!({ "isReturned": true, "returnDate": "2024-06-20" }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["isReturned"], true);
    assert_eq!(json["data"]["returnDate"], "2024-06-20");
    assert_eq!(json["data"]["quantity"], 8);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn zero_quantity_borrow_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = authenticated_session(app.clone(), &pool).await;

    let response = post_json_auth(
        app,
        "/borrows/insert",
        serde_json::json!({
            "fromShopId": 1,
            "toShopId": 2,
            "fruitId": null,
            "quantity": 0,
            "borrowDate": "2024-06-01",
            "returnDate": null
        }),
        &cookie,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
