//! Bearer token authentication and role checks.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::domain::entities::Role;
use crate::infrastructure::security::Claims;
use crate::{error::AppError, state::AppState};

/// Authenticates requests using Bearer tokens from Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// On success the verified [`Claims`] are stored in the request extensions
/// for [`require_admin`] and handlers.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing, the token signature
/// or issuer is wrong, or the token has expired.
///
/// Adds `WWW-Authenticate: Bearer` header to 401 responses per RFC 6750.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/countries/{id}", put(update_country_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let claims = st.auth_manager.verify_token(&token).inspect_err(|e| {
        tracing::debug!(uri = %parts.uri, error = %e, "Bearer token rejected");
    })?;

    parts.extensions.insert(claims);

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Lets the request through only for the `Administrator` role.
///
/// Must run after [`layer`].
///
/// # Errors
///
/// Returns `401 Unauthorized` when no claims are present and
/// `403 Forbidden` when the caller lacks the role.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let claims = req.extensions().get::<Claims>().ok_or_else(|| {
        AppError::unauthorized("Unauthorized", json!({"reason": "Authentication required"}))
    })?;

    if !claims.has_role(Role::Administrator) {
        tracing::warn!(user = %claims.email, uri = %req.uri(), "Administrator role required");
        return Err(AppError::forbidden(
            "Forbidden",
            json!({"reason": "Administrator role required"}),
        ));
    }

    Ok(next.run(req).await)
}
