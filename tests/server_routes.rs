//! Route-level tests for the probe service, driven with `oneshot` against a
//! fake database.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use dwijabake::server::{router, DatabaseProbe, ServerConfig, State};
use futures_util::future::BoxFuture;
use serde_json::{json, Value};
use tower::ServiceExt;

struct FakeProbe(Result<DateTime<Utc>, String>);

impl DatabaseProbe for FakeProbe {
    fn now(&self) -> BoxFuture<'_, Result<DateTime<Utc>, String>> {
        let result = self.0.clone();
        Box::pin(async move { result })
    }
}

fn config() -> ServerConfig {
    let mut values = BTreeMap::new();
    values.insert("DATABASE_URL".to_string(), "postgres://bakery@localhost/bakery".to_string());
    values.insert("CORS_ORIGIN".to_string(), "http://shop.bake.local:3000/".to_string());
    ServerConfig::from_map(&values).unwrap()
}

fn app(probe: FakeProbe) -> axum::Router {
    router(State::with_probe(config(), Arc::new(probe))).unwrap()
}

fn up() -> FakeProbe {
    FakeProbe(Ok(Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()))
}

async fn get(app: axum::Router, path: &str) -> Response {
    app.oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_ok_without_database() {
    let response = get(app(FakeProbe(Err("unused".into()))), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn db_reports_time_in_utc_millis() {
    let response = get(app(up()), "/db").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "ok": true, "time": "2024-05-01T12:30:00.000Z" })
    );
}

#[tokio::test]
async fn db_failure_is_still_200() {
    let probe = FakeProbe(Err("connection refused".into()));
    let response = get(app(probe), "/db").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "ok": false, "error": "connection refused" })
    );
}

#[tokio::test]
async fn unknown_route_is_404_json() {
    let response = get(app(up()), "/menu").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await, json!({ "error": "Not found: /menu" }));
}

#[tokio::test]
async fn cors_allows_configured_origin_with_credentials() {
    let request = Request::get("/health")
        .header(header::ORIGIN, "http://shop.bake.local:3000")
        .body(Body::empty())
        .unwrap();
    let response = app(up()).oneshot(request).await.unwrap();

    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://shop.bake.local:3000"
    );
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(), "true");
}

#[tokio::test]
async fn cors_preflight_lists_get() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/db")
        .header(header::ORIGIN, "http://shop.bake.local:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();
    let response = app(up()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let methods = response.headers().get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap();
    assert!(methods.to_str().unwrap().contains("GET"));
}

#[test]
fn config_reports_every_problem() {
    let mut values = BTreeMap::new();
    values.insert("API_PORT".to_string(), "bakery".to_string());
    values.insert("CORS_ORIGIN".to_string(), "not a url".to_string());

    let message = ServerConfig::from_map(&values).unwrap_err().to_string();
    assert!(message.contains("API_PORT"));
    assert!(message.contains("CORS_ORIGIN"));
    assert!(message.contains("DATABASE_URL"));
}
