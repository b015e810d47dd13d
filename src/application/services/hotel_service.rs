//! Hotel management service.

use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Hotel, NewHotel};
use crate::domain::paging::{Page, PageRequest};
use crate::domain::queries::{CountryQuery, HotelQuery, HotelRelation};
use crate::error::AppError;
use crate::infrastructure::persistence::UnitOfWork;

/// Service for reading and changing hotels.
///
/// Writes check that the referenced country exists inside the same unit of
/// work, so a missing country is reported as a validation error instead of
/// a foreign-key failure.
pub struct HotelService {
    pool: Arc<PgPool>,
}

impl HotelService {
    /// Creates a new hotel service.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Returns one page of hotels ordered by id, each with its country.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self, page: PageRequest) -> Result<Page<Hotel>, AppError> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        uow.hotels()
            .get_paged_list(page, &[HotelRelation::Country])
            .await
    }

    /// Returns a hotel with its country loaded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no hotel has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get(&self, id: i64) -> Result<Hotel, AppError> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        uow.hotels()
            .get(&HotelQuery::ById(id), &[HotelRelation::Country])
            .await?
            .ok_or_else(|| hotel_not_found(id))
    }

    /// Creates a hotel in an existing country.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the country does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, new_hotel: NewHotel) -> Result<Hotel, AppError> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        ensure_country_exists(&mut uow, new_hotel.country_id).await?;

        let created = uow.hotels().insert(new_hotel).await?;
        uow.save().await?;

        tracing::info!(id = created.id, country_id = created.country_id, "Hotel created");
        Ok(created)
    }

    /// Loads a hotel, lets `apply` modify it in place, and saves the result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no hotel has this id.
    /// Returns [`AppError::Validation`] if the new country does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(
        &self,
        id: i64,
        apply: impl FnOnce(&mut Hotel) + Send,
    ) -> Result<Hotel, AppError> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let mut hotel = uow
            .hotels()
            .get(&HotelQuery::ById(id), &[])
            .await?
            .ok_or_else(|| hotel_not_found(id))?;

        let previous_country = hotel.country_id;
        apply(&mut hotel);
        hotel.id = id;

        if hotel.country_id != previous_country {
            ensure_country_exists(&mut uow, hotel.country_id).await?;
        }

        uow.hotels().update(&hotel).await?;
        uow.save().await?;

        tracing::info!(id, "Hotel updated");
        Ok(hotel)
    }

    /// Deletes a hotel.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no hotel has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        if uow.hotels().get(&HotelQuery::ById(id), &[]).await?.is_none() {
            return Err(hotel_not_found(id));
        }

        uow.hotels().delete(id).await?;
        uow.save().await?;

        tracing::info!(id, "Hotel deleted");
        Ok(())
    }
}

async fn ensure_country_exists(uow: &mut UnitOfWork, country_id: i64) -> Result<(), AppError> {
    let exists = uow
        .countries()
        .get(&CountryQuery::ById(country_id), &[])
        .await?
        .is_some();

    if !exists {
        return Err(AppError::bad_request(
            "Submitted data is invalid",
            json!({ "fields": { "country_id": ["Country does not exist"] } }),
        ));
    }
    Ok(())
}

fn hotel_not_found(id: i64) -> AppError {
    AppError::not_found("Hotel not found", json!({ "id": id }))
}
