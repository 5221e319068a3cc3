pub mod auth;
pub mod borrow;
pub mod delivery;
pub mod fruit;
pub mod geo;
pub mod health;
pub mod inventory;
pub mod location;
pub mod staff;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (the console talks to these paths
/// directly, so they are mounted at the root).
///
/// ```text
/// /staff/login                    login (public)
/// /staff/google-login             Google login (public)
/// /auth/check                     session check (public, never 401s)
/// /auth/logout                    clear session
///
/// /staff                          list, bulk insert
/// /staff/{id}                     get, update, delete
///
/// /fruits                         list (public), create
/// /fruits/{id}                    get (public), update, delete
/// /locations                      list (public), create
/// /locations/{id}                 get (public), update, delete
/// /countries                      list (public)
/// /cities                         list (public)
///
/// /inventory                      list raw, insert
/// /inventory/list                 joined list
/// /inventory/update/{id}          update
/// /inventory/{id}                 delete
///
/// /deliveries/list                joined list
/// /deliveries/insert              insert
/// /deliveries/update/{id}         update
/// /deliveries/delete/{id}         delete
/// /deliveries/report              monthly yield report
///
/// /borrows                        list
/// /borrows/insert                 insert
/// /borrows/{id}                   update
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/staff", staff::router())
        .nest("/auth", auth::router())
        .nest("/fruits", fruit::router())
        .nest("/locations", location::router())
        .merge(geo::router())
        .nest("/inventory", inventory::router())
        .nest("/deliveries", delivery::router())
        .nest("/borrows", borrow::router())
}
