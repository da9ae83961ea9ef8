#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use dailycheck_api::config::ServerConfig;
use dailycheck_api::router::build_app_router;
use dailycheck_api::state::AppState;

pub const TEST_CRON_SECRET: &str = "test-cron-secret";

/// Build a development `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        app_env: "development".to_string(),
        cron_secret: None,
        short_id_max_attempts: 10,
    }
}

/// A production config with [`TEST_CRON_SECRET`] set.
pub fn production_config() -> ServerConfig {
    ServerConfig {
        app_env: dailycheck_api::config::PRODUCTION_ENV.to_string(),
        cron_secret: Some(TEST_CRON_SECRET.to_string()),
        ..test_config()
    }
}

/// Build the full application router against `pool` with the development
/// config.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::delete(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::put(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a form over HTTP and return its JSON body.
pub async fn create_form(pool: &PgPool, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(build_test_app(pool.clone()), "/api/v1/forms", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}

/// The standard test form: a number, a steps and a checkbox field.
pub fn sample_form() -> serde_json::Value {
    serde_json::json!({
        "name": "Daily check-in",
        "description": "Team standup numbers",
        "fields": [
            { "label": "Calls", "type": "number" },
            { "label": "Stage", "type": "steps", "options": ["A", "B"], "required": false },
            { "label": "Done", "type": "checkbox", "required": false },
        ],
    })
}

/// Field ids of a created form, in order.
pub fn field_ids(form: &serde_json::Value) -> Vec<String> {
    form["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap().to_string())
        .collect()
}
