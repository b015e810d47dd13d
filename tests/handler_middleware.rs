mod common;

use axum::ServiceExt;
use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum_test::TestServer;
use serde_json::Value;
use sqlx::PgPool;
use std::net::SocketAddr;

use hotel_listing::routes::app_router;

/// Serves the full application router over a real socket so the rate
/// limiter can read the peer address.
fn app_server(pool: PgPool, rate_limit_burst: u32, behind_proxy: bool) -> TestServer {
    let config = common::test_config(rate_limit_burst, behind_proxy);
    let state = common::create_test_state(pool);
    let app = ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(
        app_router(state, &config),
    );

    TestServer::builder().http_transport().build(app).unwrap()
}

// ─── CORS ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_preflight_allows_any_origin(pool: PgPool) {
    let server = app_server(pool, 100, false);

    let response = server
        .method(Method::OPTIONS, "/api/countries")
        .add_header("Origin", "https://bookings.example.com")
        .add_header("Access-Control-Request-Method", "POST")
        .await;

    response.assert_status_ok();
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[sqlx::test]
async fn test_simple_request_carries_cors_header(pool: PgPool) {
    let server = app_server(pool, 100, false);

    let response = server
        .get("/api/countries")
        .add_header("Origin", "https://bookings.example.com")
        .await;

    response.assert_status_ok();
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

// ─── Path normalization ──────────────────────────────────────────────────────

#[sqlx::test]
async fn test_trailing_slash_is_trimmed(pool: PgPool) {
    common::seed_sample_data(&pool).await;
    let server = app_server(pool, 100, false);

    let response = server.get("/api/countries/").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["pagination"]["totalItems"], 3);

    server.get("/health/").await.assert_status_ok();
}

// ─── Rate limiting ───────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_rate_limit_rejects_after_burst(pool: PgPool) {
    let server = app_server(pool, 1, false);

    server.get("/api/countries").await.assert_status_ok();

    let limited = server.get("/api/countries").await;
    limited.assert_status(StatusCode::TOO_MANY_REQUESTS);
}

#[sqlx::test]
async fn test_rate_limit_does_not_cover_health(pool: PgPool) {
    let server = app_server(pool, 1, false);

    server.get("/api/countries").await.assert_status_ok();
    server
        .get("/api/countries")
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);

    server.get("/health").await.assert_status_ok();
}

#[sqlx::test]
async fn test_rate_limit_behind_proxy_keys_by_forwarded_ip(pool: PgPool) {
    let server = app_server(pool, 1, true);

    server
        .get("/api/countries")
        .add_header("X-Forwarded-For", "203.0.113.7")
        .await
        .assert_status_ok();
    server
        .get("/api/countries")
        .add_header("X-Forwarded-For", "203.0.113.7")
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);

    server
        .get("/api/countries")
        .add_header("X-Forwarded-For", "198.51.100.23")
        .await
        .assert_status_ok();
}
