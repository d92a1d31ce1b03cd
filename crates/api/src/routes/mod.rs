pub mod auth;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (health is mounted separately).
///
/// Route hierarchy:
///
/// ```text
/// /signup                    register (public)
/// /login                     login (public)
/// /refresh                   exchange refresh token (public)
///
/// /tests                     create test + generate questions (requires auth)
/// /tests/{code}              test metadata (public)
/// /tests/{code}/questions    list questions (public), add question (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes at the application root.
        .merge(auth::router())
        // Quiz management.
        .nest("/tests", tests::router())
}
