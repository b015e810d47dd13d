//! Hotel entity.

use super::country::Country;

/// A hotel located in a country.
///
/// `country_id` always refers to an existing country (foreign key).
/// `country` is the optional eagerly loaded back-reference.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub rating: f64,
    pub country_id: i64,
    #[sqlx(skip)]
    pub country: Option<Country>,
}

impl Hotel {
    pub fn new(id: i64, name: String, address: String, rating: f64, country_id: i64) -> Self {
        Self {
            id,
            name,
            address,
            rating,
            country_id,
            country: None,
        }
    }
}

/// Input data for creating a new hotel.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHotel {
    pub name: String,
    pub address: String,
    pub rating: f64,
    pub country_id: i64,
}
