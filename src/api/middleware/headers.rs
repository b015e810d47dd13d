//! Response header layers: caching hints, API versioning and CORS.

use axum::http::{HeaderName, HeaderValue, header};
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

/// Version served by the `/api` routes.
pub const CURRENT_API_VERSION: &str = "1.0";

/// Version kept only for backwards compatibility.
pub const DEPRECATED_API_VERSION: &str = "2.0";

pub const API_SUPPORTED_VERSIONS: HeaderName = HeaderName::from_static("api-supported-versions");
pub const API_DEPRECATED_VERSIONS: HeaderName = HeaderName::from_static("api-deprecated-versions");

/// Marks responses as publicly cacheable for `max_age_seconds`.
///
/// Handlers that set their own `Cache-Control` keep it.
pub fn cache_control(max_age_seconds: u64) -> SetResponseHeaderLayer<Option<HeaderValue>> {
    let value = HeaderValue::try_from(format!("public, max-age={max_age_seconds}")).ok();
    SetResponseHeaderLayer::if_not_present(header::CACHE_CONTROL, value)
}

/// Advertises the current API version.
pub fn supported_version() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        API_SUPPORTED_VERSIONS,
        HeaderValue::from_static(CURRENT_API_VERSION),
    )
}

/// Advertises that the route belongs to a deprecated API version.
pub fn deprecated_version() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        API_DEPRECATED_VERSIONS,
        HeaderValue::from_static(DEPRECATED_API_VERSION),
    )
}

/// Allows cross-origin requests from anywhere.
pub fn cors() -> CorsLayer {
    CorsLayer::permissive()
}
