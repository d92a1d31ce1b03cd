use std::sync::Arc;

use quizdeck_auth::Authority;
use quizdeck_genai::CompletionClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: quizdeck_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Credential and token authority.
    pub authority: Authority,
    /// Completion service client used for question generation.
    pub genai: Arc<CompletionClient>,
}
