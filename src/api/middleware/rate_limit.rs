//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder, key_extractor::KeyExtractor};

/// Creates a per-client rate limiter.
///
/// # Limits
///
/// - **Rate**: one token replenished every `per_second` seconds
/// - **Burst**: up to `burst` requests at once
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Pass [`tower_governor::key_extractor::PeerIpKeyExtractor`] to key by the
/// socket peer address, or
/// [`tower_governor::key_extractor::SmartIpKeyExtractor`] behind a trusted
/// reverse proxy to honour `X-Forwarded-For` / `X-Real-IP`.
///
/// # Example
///
/// ```rust,ignore
/// let api = api_routes(state.clone(), 60)
///     .layer(rate_limit::layer(PeerIpKeyExtractor, 2, 100));
/// ```
pub fn layer<K>(
    key_extractor: K,
    per_second: u64,
    burst: u32,
) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>
where
    K: KeyExtractor,
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second.max(1))
            .burst_size(burst.max(1))
            .key_extractor(key_extractor)
            .finish()
            .expect("rate limit period and burst are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
