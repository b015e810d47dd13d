#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;

use hotel_listing::api::routes::api_routes;
use hotel_listing::config::Config;
use hotel_listing::domain::entities::{ApiUser, Role};
use hotel_listing::infrastructure::security::JwtSigner;
use hotel_listing::state::AppState;

pub const TEST_SECRET: &str = "test-signing-secret-for-hotels";
pub const TEST_ISSUER: &str = "hotel-listing";

pub fn test_signer() -> JwtSigner {
    JwtSigner::new(TEST_SECRET, TEST_ISSUER, 15)
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), test_signer())
}

/// Configuration for serving the full application router in tests.
pub fn test_config(rate_limit_burst: u32, behind_proxy: bool) -> Config {
    Config {
        database_url: String::new(),
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        behind_proxy,
        jwt_secret: TEST_SECRET.to_string(),
        jwt_issuer: TEST_ISSUER.to_string(),
        jwt_lifetime_minutes: 15,
        rate_limit_per_second: 60,
        rate_limit_burst,
        cache_max_age_seconds: 60,
        db_max_connections: 5,
        db_connect_timeout: 5,
        db_idle_timeout: 60,
        db_max_lifetime: 300,
    }
}

/// Builds a server exposing every `/api` route, without rate limiting.
pub fn api_server(pool: PgPool) -> TestServer {
    let state = create_test_state(pool);
    let app = Router::new()
        .nest("/api", api_routes(state.clone(), 60))
        .with_state(state);
    TestServer::new(app).unwrap()
}

pub async fn create_test_country(pool: &PgPool, name: &str, short_name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO countries (name, short_name) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(short_name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_hotel(
    pool: &PgPool,
    name: &str,
    address: &str,
    rating: f64,
    country_id: i64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO hotels (name, address, rating, country_id) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(name)
    .bind(address)
    .bind(rating)
    .bind(country_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Inserts the three sample countries with one hotel each and returns the country ids.
pub async fn seed_sample_data(pool: &PgPool) -> [i64; 3] {
    let jamaica = create_test_country(pool, "Jamaica", "JM").await;
    let bahamas = create_test_country(pool, "Bahamas", "BS").await;
    let cayman = create_test_country(pool, "Cayman Island", "CI").await;

    create_test_hotel(pool, "Sandals Resort and Spa", "Negril", 4.5, jamaica).await;
    create_test_hotel(pool, "Grand Palladium", "Nassau", 4.0, bahamas).await;
    create_test_hotel(pool, "Comfort Suites", "George Town", 4.3, cayman).await;

    [jamaica, bahamas, cayman]
}

/// Signs a token for an account that only exists in the token.
pub fn token_with_roles(roles: Vec<Role>) -> String {
    let user = ApiUser {
        id: 42,
        email: "tester@example.com".to_string(),
        password_hash: String::new(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        phone_number: None,
        roles,
        created_at: Utc::now(),
    };
    test_signer().sign(&user).unwrap()
}

pub fn user_token() -> String {
    token_with_roles(vec![Role::User])
}

pub fn admin_token() -> String {
    token_with_roles(vec![Role::User, Role::Administrator])
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
