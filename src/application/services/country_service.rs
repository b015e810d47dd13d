//! Country management service.

use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Country, NewCountry};
use crate::domain::paging::{Page, PageRequest};
use crate::domain::queries::{CountryQuery, CountryRelation};
use crate::error::AppError;
use crate::infrastructure::persistence::UnitOfWork;

/// Service for reading and changing countries.
///
/// Every call runs in its own [`UnitOfWork`]; writes are committed with a
/// single `save` at the end of the call and rolled back on any error.
pub struct CountryService {
    pool: Arc<PgPool>,
}

impl CountryService {
    /// Creates a new country service.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Returns one page of countries ordered by id, without hotels.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self, page: PageRequest) -> Result<Page<Country>, AppError> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        uow.countries().get_paged_list(page, &[]).await
    }

    /// Returns every country ordered by id, without hotels.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_all(&self) -> Result<Vec<Country>, AppError> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        uow.countries().get_all(&[]).await
    }

    /// Returns a country with its hotels loaded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no country has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get(&self, id: i64) -> Result<Country, AppError> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        uow.countries()
            .get(&CountryQuery::ById(id), &[CountryRelation::Hotels])
            .await?
            .ok_or_else(|| country_not_found(id))
    }

    /// Creates a country and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the store rejects the values.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, new_country: NewCountry) -> Result<Country, AppError> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let created = uow.countries().insert(new_country).await?;
        uow.save().await?;

        tracing::info!(id = created.id, name = %created.name, "Country created");
        Ok(created)
    }

    /// Loads a country, lets `apply` modify it in place, and saves the result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no country has this id.
    /// Returns [`AppError::Validation`] if the store rejects the new values.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(
        &self,
        id: i64,
        apply: impl FnOnce(&mut Country) + Send,
    ) -> Result<Country, AppError> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let mut country = uow
            .countries()
            .get(&CountryQuery::ById(id), &[])
            .await?
            .ok_or_else(|| country_not_found(id))?;

        apply(&mut country);
        country.id = id;

        uow.countries().update(&country).await?;
        uow.save().await?;

        tracing::info!(id, "Country updated");
        Ok(country)
    }

    /// Deletes a country and, through the foreign key, its hotels.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no country has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        if uow
            .countries()
            .get(&CountryQuery::ById(id), &[])
            .await?
            .is_none()
        {
            return Err(country_not_found(id));
        }

        uow.countries().delete(id).await?;
        uow.save().await?;

        tracing::info!(id, "Country deleted");
        Ok(())
    }
}

fn country_not_found(id: i64) -> AppError {
    AppError::not_found("Country not found", json!({ "id": id }))
}
