mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_list_hotels_includes_country(pool: PgPool) {
    common::seed_sample_data(&pool).await;
    let server = common::api_server(pool);

    let response = server.get("/api/hotels").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["pagination"]["totalItems"], 3);
    assert_eq!(json["items"][0]["name"], "Sandals Resort and Spa");
    assert_eq!(json["items"][0]["rating"], 4.5);
    assert_eq!(json["items"][0]["country"]["name"], "Jamaica");
}

#[sqlx::test]
async fn test_list_hotels_empty(pool: PgPool) {
    let server = common::api_server(pool);

    let response = server.get("/api/hotels").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["items"], json!([]));
    assert_eq!(json["pagination"]["totalPages"], 0);
}

#[sqlx::test]
async fn test_get_hotel(pool: PgPool) {
    let [_, bahamas, _] = common::seed_sample_data(&pool).await;
    let hotel_id = common::create_test_hotel(&pool, "Atlantis", "Paradise Island", 4.6, bahamas).await;
    let server = common::api_server(pool);

    let response = server
        .get(&format!("/api/hotels/{hotel_id}"))
        .add_header("Authorization", common::bearer(&common::user_token()))
        .await;

    response.assert_status_ok();
    assert!(response.maybe_header("cache-control").is_none());
    let json = response.json::<Value>();
    assert_eq!(json["address"], "Paradise Island");
    assert_eq!(json["country"]["shortName"], "BS");
}

#[sqlx::test]
async fn test_get_hotel_requires_auth(pool: PgPool) {
    let [jamaica, ..] = common::seed_sample_data(&pool).await;
    let hotel_id = common::create_test_hotel(&pool, "Half Moon", "Montego Bay", 4.8, jamaica).await;
    let server = common::api_server(pool);

    let response = server.get(&format!("/api/hotels/{hotel_id}")).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()["www-authenticate"], "Bearer");
}

#[sqlx::test]
async fn test_get_hotel_not_found(pool: PgPool) {
    let server = common::api_server(pool);

    let response = server
        .get("/api/hotels/12345")
        .add_header("Authorization", common::bearer(&common::user_token()))
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_get_hotel_non_numeric_id(pool: PgPool) {
    let server = common::api_server(pool);

    let response = server
        .get("/api/hotels/abc")
        .add_header("Authorization", common::bearer(&common::user_token()))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["reason"].is_string());
}

#[sqlx::test]
async fn test_create_hotel(pool: PgPool) {
    let [jamaica, ..] = common::seed_sample_data(&pool).await;
    let server = common::api_server(pool.clone());

    let response = server
        .post("/api/hotels")
        .add_header("Authorization", common::bearer(&common::admin_token()))
        .json(&json!({
            "name": "Half Moon",
            "address": "Montego Bay",
            "rating": 4.8,
            "countryId": jamaica
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    let id = json["id"].as_i64().unwrap();
    assert_eq!(response.headers()["location"], format!("/api/hotels/{id}"));
    assert_eq!(common::count_rows(&pool, "hotels").await, 4);
}

#[sqlx::test]
async fn test_create_hotel_unknown_country(pool: PgPool) {
    let server = common::api_server(pool.clone());

    let response = server
        .post("/api/hotels")
        .add_header("Authorization", common::bearer(&common::admin_token()))
        .json(&json!({
            "name": "Nowhere Inn",
            "address": "Nowhere",
            "rating": 3.0,
            "countryId": 777
        }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert!(json["error"]["details"]["fields"]["country_id"].is_array());
    assert_eq!(common::count_rows(&pool, "hotels").await, 0);
}

#[sqlx::test]
async fn test_create_hotel_rating_out_of_range(pool: PgPool) {
    let [jamaica, ..] = common::seed_sample_data(&pool).await;
    let server = common::api_server(pool);

    let response = server
        .post("/api/hotels")
        .add_header("Authorization", common::bearer(&common::admin_token()))
        .json(&json!({
            "name": "Overrated",
            "address": "Kingston",
            "rating": 6,
            "countryId": jamaica
        }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_create_hotel_requires_admin(pool: PgPool) {
    let [jamaica, ..] = common::seed_sample_data(&pool).await;
    let server = common::api_server(pool);

    let response = server
        .post("/api/hotels")
        .add_header("Authorization", common::bearer(&common::user_token()))
        .json(&json!({
            "name": "Half Moon",
            "address": "Montego Bay",
            "rating": 4.8,
            "countryId": jamaica
        }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[sqlx::test]
async fn test_update_hotel_moves_country(pool: PgPool) {
    let [jamaica, bahamas, _] = common::seed_sample_data(&pool).await;
    let hotel_id = common::create_test_hotel(&pool, "Half Moon", "Montego Bay", 4.8, jamaica).await;
    let server = common::api_server(pool);

    let response = server
        .put(&format!("/api/hotels/{hotel_id}"))
        .add_header("Authorization", common::bearer(&common::user_token()))
        .json(&json!({
            "name": "Half Moon",
            "address": "Nassau",
            "rating": 4.7,
            "countryId": bahamas
        }))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);

    let json = server
        .get(&format!("/api/hotels/{hotel_id}"))
        .add_header("Authorization", common::bearer(&common::user_token()))
        .await
        .json::<Value>();
    assert_eq!(json["country"]["name"], "Bahamas");
    assert_eq!(json["rating"], 4.7);
}

#[sqlx::test]
async fn test_update_hotel_unknown_country(pool: PgPool) {
    let [jamaica, ..] = common::seed_sample_data(&pool).await;
    let hotel_id = common::create_test_hotel(&pool, "Half Moon", "Montego Bay", 4.8, jamaica).await;
    let server = common::api_server(pool);

    let response = server
        .put(&format!("/api/hotels/{hotel_id}"))
        .add_header("Authorization", common::bearer(&common::user_token()))
        .json(&json!({
            "name": "Half Moon",
            "address": "Montego Bay",
            "rating": 4.8,
            "countryId": 9999
        }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_delete_hotel(pool: PgPool) {
    let [jamaica, ..] = common::seed_sample_data(&pool).await;
    let hotel_id = common::create_test_hotel(&pool, "Half Moon", "Montego Bay", 4.8, jamaica).await;
    let server = common::api_server(pool.clone());

    let response = server
        .delete(&format!("/api/hotels/{hotel_id}"))
        .add_header("Authorization", common::bearer(&common::user_token()))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(common::count_rows(&pool, "hotels").await, 3);
    assert_eq!(common::count_rows(&pool, "countries").await, 3);
}

#[sqlx::test]
async fn test_delete_hotel_not_found(pool: PgPool) {
    let server = common::api_server(pool);

    let response = server
        .delete("/api/hotels/4242")
        .add_header("Authorization", common::bearer(&common::user_token()))
        .await;

    response.assert_status_not_found();
}
