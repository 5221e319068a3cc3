use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: orchard_db::DbPool,
    /// Server configuration (session secret, CORS origins, Google client id).
    pub config: Arc<ServerConfig>,
    /// Shared HTTP client for the Google tokeninfo call.
    pub http: reqwest::Client,
}
