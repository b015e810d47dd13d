//! Handlers for country endpoints.

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::api::dto::country::{CountryDto, CreateCountryDto, UpdateCountryDto};
use crate::api::dto::pagination::{PagedResponse, PaginationParams};
use crate::api::extract::{ApiPath, ValidatedJson};
use crate::error::AppError;
use crate::state::AppState;

/// Lists countries one page at a time.
///
/// # Endpoint
///
/// `GET /api/countries?pageNumber=1&pageSize=15`
///
/// Missing or unparsable paging parameters fall back to page 1 with 15
/// items; page sizes above 50 are clamped.
///
/// # Response
///
/// ```json
/// {
///   "pagination": { "pageNumber": 1, "pageSize": 15, "totalItems": 3, "totalPages": 1 },
///   "items": [ { "id": 1, "name": "Jamaica", "shortName": "JM" } ]
/// }
/// ```
pub async fn list_countries_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PagedResponse<CountryDto>>, AppError> {
    let page = state
        .country_service
        .list(params.to_page_request())
        .await?;

    Ok(Json(page.into()))
}

/// Returns every country without paging.
///
/// # Endpoint
///
/// `GET /api/v2/countries` (deprecated API version 2.0)
pub async fn list_all_countries_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CountryDto>>, AppError> {
    let countries = state.country_service.list_all().await?;
    Ok(Json(countries.into_iter().map(CountryDto::from).collect()))
}

/// Returns a country together with its hotels.
///
/// # Endpoint
///
/// `GET /api/countries/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no country has this id.
pub async fn get_country_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<CountryDto>, AppError> {
    let country = state.country_service.get(id).await?;
    Ok(Json(country.into()))
}

/// Creates a country. Administrators only.
///
/// # Endpoint
///
/// `POST /api/countries`
///
/// # Request Body
///
/// ```json
/// { "name": "Kenya", "shortName": "KE" }
/// ```
///
/// Responds with `201 Created`, a `Location` header pointing at the new
/// resource and the created country.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or fails validation.
pub async fn create_country_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCountryDto>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.country_service.create(payload.into_new()).await?;
    let location = format!("/api/countries/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CountryDto::from(created)),
    ))
}

/// Replaces a country's name and short name.
///
/// # Endpoint
///
/// `PUT /api/countries/{id}`
///
/// Responds with `204 No Content`.
///
/// # Errors
///
/// - 400 Bad Request if the id is not positive or the body is invalid
/// - 404 Not Found if no country has this id
pub async fn update_country_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateCountryDto>,
) -> Result<StatusCode, AppError> {
    ensure_valid_id(id, "update_country")?;

    state
        .country_service
        .update(id, |country| payload.apply_to(country))
        .await
        .inspect_err(|e| tracing::warn!(id, error = %e, "Invalid UPDATE attempt in update_country"))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a country and its hotels.
///
/// # Endpoint
///
/// `DELETE /api/countries/{id}`
///
/// Responds with `204 No Content`.
///
/// # Errors
///
/// - 400 Bad Request if the id is not positive
/// - 404 Not Found if no country has this id
pub async fn delete_country_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    ensure_valid_id(id, "delete_country")?;

    state
        .country_service
        .delete(id)
        .await
        .inspect_err(|e| tracing::warn!(id, error = %e, "Invalid DELETE attempt in delete_country"))?;

    Ok(StatusCode::NO_CONTENT)
}

pub(crate) fn ensure_valid_id(id: i64, operation: &str) -> Result<(), AppError> {
    if id < 1 {
        tracing::warn!(id, operation, "Rejected non-positive id");
        return Err(AppError::bad_request(
            "Invalid id",
            json!({ "id": id, "reason": "Identifier must be positive" }),
        ));
    }
    Ok(())
}
