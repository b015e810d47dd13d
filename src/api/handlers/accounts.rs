//! Handlers for account registration and login.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;

use crate::api::dto::account::{LoginUserDto, TokenResponse, UserDto};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /api/accounts/register`
///
/// # Request Body
///
/// ```json
/// {
///   "email": "guest@example.com",
///   "password": "P@ssword1",
///   "firstName": "Gina",
///   "lastName": "Guest",
///   "phoneNumber": "+1 876 555 0100",
///   "roles": ["User"]
/// }
/// ```
///
/// Responds with `202 Accepted`. Accounts get the `User` role when none is
/// requested; `Administrator` can only be granted with the admin CLI.
///
/// # Errors
///
/// Returns 400 Bad Request on validation failures or a taken email.
pub async fn register_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserDto>,
) -> Result<StatusCode, AppError> {
    let email = payload.email.clone();

    state
        .auth_manager
        .register(payload.into())
        .await
        .inspect_err(|e| tracing::warn!(%email, error = %e, "Registration attempt failed"))?;

    Ok(StatusCode::ACCEPTED)
}

/// Exchanges credentials for a bearer token.
///
/// # Endpoint
///
/// `POST /api/accounts/login`
///
/// # Response
///
/// `202 Accepted` with:
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIs..." }
/// ```
///
/// # Errors
///
/// Returns 401 Unauthorized if the email is unknown or the password is wrong.
pub async fn login_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginUserDto>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    let Some(user) = state
        .auth_manager
        .validate_user(&payload.email, &payload.password)
        .await?
    else {
        tracing::warn!(email = %payload.email, "Login attempt with invalid credentials");
        return Err(AppError::unauthorized(
            "Unauthorized",
            json!({ "reason": "Invalid email or password" }),
        ));
    };

    let token = state.auth_manager.create_token(&user)?;
    tracing::info!(user_id = user.id, "Issued access token");

    Ok((StatusCode::ACCEPTED, Json(TokenResponse { token })))
}
