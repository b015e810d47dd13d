//! Handlers for hotel endpoints.

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use super::countries::ensure_valid_id;
use crate::api::dto::hotel::{CreateHotelDto, HotelDto, UpdateHotelDto};
use crate::api::dto::pagination::{PagedResponse, PaginationParams};
use crate::api::extract::{ApiPath, ValidatedJson};
use crate::error::AppError;
use crate::state::AppState;

/// Lists hotels one page at a time, each with its country.
///
/// # Endpoint
///
/// `GET /api/hotels?pageNumber=1&pageSize=15`
pub async fn list_hotels_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PagedResponse<HotelDto>>, AppError> {
    let page = state.hotel_service.list(params.to_page_request()).await?;
    Ok(Json(page.into()))
}

/// Returns a hotel together with its country.
///
/// # Endpoint
///
/// `GET /api/hotels/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no hotel has this id.
pub async fn get_hotel_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<HotelDto>, AppError> {
    let hotel = state.hotel_service.get(id).await?;
    Ok(Json(hotel.into()))
}

/// Creates a hotel. Administrators only.
///
/// # Endpoint
///
/// `POST /api/hotels`
///
/// # Request Body
///
/// ```json
/// { "name": "Sandals Resort and Spa", "address": "Negril", "rating": 4.5, "countryId": 1 }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is invalid or the country does not exist.
pub async fn create_hotel_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.hotel_service.create(payload.into_new()).await?;
    let location = format!("/api/hotels/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(HotelDto::from(created)),
    ))
}

/// Replaces every field of a hotel.
///
/// # Endpoint
///
/// `PUT /api/hotels/{id}`
///
/// # Errors
///
/// - 400 Bad Request if the id is not positive, the body is invalid or the
///   new country does not exist
/// - 404 Not Found if no hotel has this id
pub async fn update_hotel_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateHotelDto>,
) -> Result<StatusCode, AppError> {
    ensure_valid_id(id, "update_hotel")?;

    state
        .hotel_service
        .update(id, |hotel| payload.apply_to(hotel))
        .await
        .inspect_err(|e| tracing::warn!(id, error = %e, "Invalid UPDATE attempt in update_hotel"))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a hotel.
///
/// # Endpoint
///
/// `DELETE /api/hotels/{id}`
pub async fn delete_hotel_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    ensure_valid_id(id, "delete_hotel")?;

    state
        .hotel_service
        .delete(id)
        .await
        .inspect_err(|e| tracing::warn!(id, error = %e, "Invalid DELETE attempt in delete_hotel"))?;

    Ok(StatusCode::NO_CONTENT)
}
