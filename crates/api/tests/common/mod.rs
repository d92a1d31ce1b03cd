//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use quizdeck_api::config::ServerConfig;
use quizdeck_api::routes;
use quizdeck_api::state::AppState;
use quizdeck_auth::{AuthConfig, Authority};
use quizdeck_genai::{CompletionClient, GenAiConfig};

/// Canned completion content: two well-formed questions.
pub const SAMPLE_QUESTIONS_JSON: &str = r#"{"questions": [
  {"question": "What is 2 + 2?",
   "options": [{"id": 1, "text": "3"}, {"id": 2, "text": "4"},
               {"id": 3, "text": "5"}, {"id": 4, "text": "22"}],
   "correctAnswers": [2]},
  {"question": "Which numbers are prime?",
   "options": [{"id": 1, "text": "4"}, {"id": 2, "text": "5"},
               {"id": 3, "text": "6"}, {"id": 4, "text": "7"}],
   "correctAnswers": [2, 4]}
]}"#;

/// Signing secrets shared by the test app and token-crafting tests.
pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        access_secret: "access-secret-for-tests-only".to_string(),
        refresh_secret: "refresh-secret-for-tests-only".to_string(),
        access_token_expiry_mins: 15,
        refresh_token_expiry_days: 7,
    }
}

/// Build a test `ServerConfig` with safe defaults, pointing the completion
/// client at `genai_base_url` with a 1-second timeout.
pub fn test_config(genai_base_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        auth: test_auth_config(),
        genai: GenAiConfig {
            base_url: genai_base_url.to_string(),
            model: "gpt-4o".to_string(),
            timeout_secs: 1,
            question_count: 2,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and completion service URL.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app_with_genai(pool: PgPool, genai_base_url: &str) -> Router {
    let config = test_config(genai_base_url);

    let authority = Authority::new(pool.clone(), Arc::new(config.auth.clone()));
    let genai = Arc::new(CompletionClient::new(config.genai.clone()));

    let state = AppState {
        pool,
        config: Arc::new(config),
        authority,
        genai,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Build the app with the completion client aimed at a port nothing listens
/// on. Tests that never reach question generation use this.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_genai(pool, "http://127.0.0.1:9")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// POST a JSON body and return the raw response.
pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// POST a JSON body with a Bearer token.
pub async fn post_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// GET a path and return the raw response.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

// ---------------------------------------------------------------------------
// Mock completion servers
// ---------------------------------------------------------------------------

/// Spawn a mock completions server that always replies with `content` as the
/// assistant message. Returns its base URL.
pub async fn spawn_mock_completions(content: &'static str) -> String {
    let app = Router::new().route(
        "/v1/chat/completions",
        axum::routing::post(move || async move {
            axum::Json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": content}}]
            }))
        }),
    );
    serve_mock(app).await
}

/// Spawn a mock completions server that always fails with HTTP 500.
pub async fn spawn_failing_completions() -> String {
    let app = Router::new().route(
        "/v1/chat/completions",
        axum::routing::post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model exploded") }),
    );
    serve_mock(app).await
}

/// Spawn a mock completions server that answers slower than the client
/// timeout allows.
pub async fn spawn_hanging_completions() -> String {
    let app = Router::new().route(
        "/v1/chat/completions",
        axum::routing::post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "too late"
        }),
    );
    serve_mock(app).await
}

async fn serve_mock(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
