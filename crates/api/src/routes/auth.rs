//! Route definitions for the authentication endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at the application root.
///
/// ```text
/// POST /signup   -> signup
/// POST /login    -> login
/// POST /refresh  -> refresh
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
}
