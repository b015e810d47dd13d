//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check: database (public)
//! - `/api/*`            - REST API, see [`crate::api::routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, for browser clients
//! - **Rate limiting** - Per-IP token bucket on `/api` (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling
//! - **Panic recovery** - Handler panics become a generic 500 response

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{headers, panic, rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_governor::key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `config` - rate limit, cache and proxy settings; when `behind_proxy` is
///   `true`, rate limiting reads the client IP from `X-Forwarded-For` /
///   `X-Real-IP` instead of the peer socket address
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let api_router = api::routes::api_routes(state.clone(), config.cache_max_age_seconds);

    let api_router = if config.behind_proxy {
        api_router.layer(rate_limit::layer(
            SmartIpKeyExtractor,
            config.rate_limit_per_second,
            config.rate_limit_burst,
        ))
    } else {
        api_router.layer(rate_limit::layer(
            PeerIpKeyExtractor,
            config.rate_limit_per_second,
            config.rate_limit_burst,
        ))
    };

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(panic::layer())
        .layer(headers::cors())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
