//! Entity tags and conditional `GET` handling for cacheable reads.

use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::{HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Tags successful `GET` responses with a strong `ETag` computed from the
/// body, and answers `304 Not Modified` when `If-None-Match` names it.
///
/// The 304 keeps every header of the full response except the content
/// headers, so outer layers still add `Cache-Control` and version headers.
///
/// # Example
///
/// ```rust,ignore
/// let reads = Router::new()
///     .route("/countries", get(list_countries_handler))
///     .layer(middleware::from_fn(etag::layer));
/// ```
pub async fn layer(req: Request, next: Next) -> Result<Response, AppError> {
    if req.method() != Method::GET {
        return Ok(next.run(req).await);
    }

    let if_none_match = req.headers().get(header::IF_NONE_MATCH).cloned();
    let response = next.run(req).await;

    if response.status() != StatusCode::OK {
        return Ok(response);
    }

    let (mut parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to buffer response body");
        AppError::unexpected()
    })?;

    let tag = entity_tag(&bytes);
    let tag_value = HeaderValue::from_str(&tag).map_err(|e| {
        tracing::error!(error = %e, "Invalid entity tag");
        AppError::unexpected()
    })?;
    parts.headers.insert(header::ETAG, tag_value);

    if if_none_match.is_some_and(|value| matches_tag(&value, &tag)) {
        tracing::debug!(etag = %tag, "Representation not modified");
        parts.status = StatusCode::NOT_MODIFIED;
        parts.headers.remove(header::CONTENT_TYPE);
        parts.headers.remove(header::CONTENT_LENGTH);
        return Ok(Response::from_parts(parts, Body::empty()));
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

/// Quoted hex SHA-256 of the body.
fn entity_tag(body: &[u8]) -> String {
    format!("\"{}\"", hex::encode(Sha256::digest(body)))
}

/// Weak comparison as used for `If-None-Match`: `W/` prefixes are ignored.
fn matches_tag(if_none_match: &HeaderValue, tag: &str) -> bool {
    let Ok(value) = if_none_match.to_str() else {
        return false;
    };

    value
        .split(',')
        .map(str::trim)
        .any(|candidate| candidate == "*" || candidate.trim_start_matches("W/") == tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_tag_is_quoted_sha256() {
        let tag = entity_tag(b"[]");

        assert_eq!(tag.len(), 66);
        assert!(tag.starts_with('"') && tag.ends_with('"'));
        assert_eq!(tag, entity_tag(b"[]"));
        assert_ne!(tag, entity_tag(b"[1]"));
    }

    #[test]
    fn test_matches_exact_and_weak_tags() {
        let tag = entity_tag(b"body");

        assert!(matches_tag(&HeaderValue::from_str(&tag).unwrap(), &tag));
        assert!(matches_tag(
            &HeaderValue::from_str(&format!("W/{tag}")).unwrap(),
            &tag
        ));
    }

    #[test]
    fn test_matches_tag_in_list_and_wildcard() {
        let tag = entity_tag(b"body");
        let list = HeaderValue::from_str(&format!("\"other\", {tag}")).unwrap();

        assert!(matches_tag(&list, &tag));
        assert!(matches_tag(&HeaderValue::from_static("*"), &tag));
    }

    #[test]
    fn test_different_tag_does_not_match() {
        let tag = entity_tag(b"body");

        assert!(!matches_tag(&HeaderValue::from_static("\"stale\""), &tag));
    }
}
