//! API route configuration.
//!
//! Reads are public and carry a `Cache-Control` hint and an `ETag`, except a
//! single hotel, which requires any authenticated account. Creating countries
//! and hotels requires the `Administrator` role; updating and deleting them
//! requires any authenticated account.

use crate::api::handlers::{
    create_country_handler, create_hotel_handler, delete_country_handler, delete_hotel_handler,
    get_country_handler, get_hotel_handler, list_all_countries_handler, list_countries_handler,
    list_hotels_handler, login_handler, register_handler, update_country_handler,
    update_hotel_handler,
};
use crate::api::middleware::{auth, etag, headers};
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post, put},
};

/// Every `/api` route, versioning headers included.
///
/// # Endpoints
///
/// - `GET    /countries`             - Paged country list (public)
/// - `GET    /countries/{id}`        - Country with hotels (public)
/// - `POST   /countries`             - Create country (Administrator)
/// - `PUT    /countries/{id}`        - Replace country (authenticated)
/// - `DELETE /countries/{id}`        - Delete country (authenticated)
/// - `GET    /hotels`                - Paged hotel list (public)
/// - `GET    /hotels/{id}`           - Hotel with country (authenticated)
/// - `POST   /hotels`                - Create hotel (Administrator)
/// - `PUT    /hotels/{id}`           - Replace hotel (authenticated)
/// - `DELETE /hotels/{id}`           - Delete hotel (authenticated)
/// - `POST   /accounts/register`     - Register account (public)
/// - `POST   /accounts/login`        - Issue bearer token (public)
/// - `GET    /v2/countries`          - All countries, deprecated version 2.0
pub fn api_routes(state: AppState, cache_max_age_seconds: u64) -> Router<AppState> {
    let v1 = Router::new()
        .merge(
            public_routes()
                .layer(middleware::from_fn(etag::layer))
                .layer(headers::cache_control(cache_max_age_seconds)),
        )
        .merge(account_routes())
        .merge(
            authenticated_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
        )
        .merge(
            admin_routes()
                .route_layer(middleware::from_fn(auth::require_admin))
                .route_layer(middleware::from_fn_with_state(state, auth::layer)),
        )
        .layer(headers::supported_version());

    let v2 = Router::new()
        .route("/v2/countries", get(list_all_countries_handler))
        .layer(middleware::from_fn(etag::layer))
        .layer(headers::cache_control(cache_max_age_seconds))
        .layer(headers::deprecated_version());

    v1.merge(v2)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/countries", get(list_countries_handler))
        .route("/countries/{id}", get(get_country_handler))
        .route("/hotels", get(list_hotels_handler))
}

fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/accounts/register", post(register_handler))
        .route("/accounts/login", post(login_handler))
}

fn authenticated_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/countries/{id}",
            put(update_country_handler).delete(delete_country_handler),
        )
        .route(
            "/hotels/{id}",
            get(get_hotel_handler)
                .put(update_hotel_handler)
                .delete(delete_hotel_handler),
        )
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/countries", post(create_country_handler))
        .route("/hotels", post(create_hotel_handler))
}
