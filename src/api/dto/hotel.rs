//! DTOs for hotel endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::country::CountryDto;
use crate::domain::entities::{Hotel, NewHotel};

/// Request body for creating or replacing a hotel.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHotelDto {
    #[validate(length(min = 1, max = 150, message = "Hotel name must be 1 to 150 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 250, message = "Hotel address must be 1 to 250 characters"))]
    pub address: String,

    #[validate(range(min = 1.0, max = 5.0, message = "Rating must be between 1 and 5"))]
    pub rating: f64,

    #[validate(range(min = 1, message = "Country id must be positive"))]
    pub country_id: i64,
}

/// Updates carry the same fields as creation.
pub type UpdateHotelDto = CreateHotelDto;

impl CreateHotelDto {
    pub fn into_new(self) -> NewHotel {
        NewHotel {
            name: self.name,
            address: self.address,
            rating: self.rating,
            country_id: self.country_id,
        }
    }

    /// Copies the request fields onto a loaded hotel.
    pub fn apply_to(self, hotel: &mut Hotel) {
        hotel.name = self.name;
        hotel.address = self.address;
        hotel.rating = self.rating;
        hotel.country_id = self.country_id;
        hotel.country = None;
    }
}

/// Hotel as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelDto {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub rating: f64,
    pub country_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<CountryDto>,
}

impl From<Hotel> for HotelDto {
    fn from(h: Hotel) -> Self {
        Self {
            id: h.id,
            name: h.name,
            address: h.address,
            rating: h.rating,
            country_id: h.country_id,
            country: h.country.map(CountryDto::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Country;

    fn dto(rating: f64) -> CreateHotelDto {
        CreateHotelDto {
            name: "Comfort Suites".to_string(),
            address: "George Town".to_string(),
            rating,
            country_id: 3,
        }
    }

    #[test]
    fn test_rating_bounds() {
        assert!(dto(4.3).validate().is_ok());
        assert!(dto(1.0).validate().is_ok());
        assert!(dto(5.0).validate().is_ok());
        assert!(dto(0.5).validate().is_err());
        assert!(dto(5.5).validate().is_err());
    }

    #[test]
    fn test_camel_case_body() {
        let dto: CreateHotelDto = serde_json::from_str(
            r#"{"name": "Grand Palladium", "address": "Nassau", "rating": 4, "countryId": 2}"#,
        )
        .unwrap();
        assert_eq!(dto.country_id, 2);
        assert_eq!(dto.rating, 4.0);
    }

    #[test]
    fn test_apply_to_drops_stale_country() {
        let mut hotel = Hotel::new(9, "Old".to_string(), "Old St".to_string(), 3.0, 1);
        hotel.country = Some(Country::new(1, "Jamaica".to_string(), "JM".to_string()));

        dto(4.0).apply_to(&mut hotel);

        assert_eq!(hotel.id, 9);
        assert_eq!(hotel.country_id, 3);
        assert!(hotel.country.is_none());
    }

    #[test]
    fn test_country_included_when_loaded() {
        let mut hotel = Hotel::new(1, "Sandals".to_string(), "Negril".to_string(), 4.5, 1);
        hotel.country = Some(Country::new(1, "Jamaica".to_string(), "JM".to_string()));

        let json = serde_json::to_value(HotelDto::from(hotel)).unwrap();
        assert_eq!(json["countryId"], 1);
        assert_eq!(json["country"]["name"], "Jamaica");
    }
}
