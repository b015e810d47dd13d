//! DTOs for country endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::hotel::HotelDto;
use crate::domain::entities::{Country, NewCountry};

/// Request body for creating or replacing a country.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCountryDto {
    #[validate(length(min = 1, max = 50, message = "Country name must be 1 to 50 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 2, message = "Short country name must be 1 or 2 characters"))]
    pub short_name: String,
}

/// Updates carry the same fields as creation.
pub type UpdateCountryDto = CreateCountryDto;

impl CreateCountryDto {
    pub fn into_new(self) -> NewCountry {
        NewCountry {
            name: self.name,
            short_name: self.short_name,
        }
    }

    /// Copies the request fields onto a loaded country.
    pub fn apply_to(self, country: &mut Country) {
        country.name = self.name;
        country.short_name = self.short_name;
    }
}

/// Country as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDto {
    pub id: i64,
    pub name: String,
    pub short_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotels: Option<Vec<HotelDto>>,
}

impl From<Country> for CountryDto {
    fn from(c: Country) -> Self {
        Self {
            id: c.id,
            name: c.name,
            short_name: c.short_name,
            hotels: c
                .hotels
                .map(|hotels| hotels.into_iter().map(HotelDto::from).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Hotel;

    #[test]
    fn test_valid_country() {
        let dto: CreateCountryDto =
            serde_json::from_str(r#"{"name": "Kenya", "shortName": "KE"}"#).unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_short_name_too_long() {
        let dto = CreateCountryDto {
            name: "Kenya".to_string(),
            short_name: "KEN".to_string(),
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("short_name"));
    }

    #[test]
    fn test_name_required_and_bounded() {
        let empty = CreateCountryDto {
            name: String::new(),
            short_name: "KE".to_string(),
        };
        assert!(empty.validate().is_err());

        let long = CreateCountryDto {
            name: "x".repeat(51),
            short_name: "KE".to_string(),
        };
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_apply_to_keeps_identity() {
        let mut country = Country::new(4, "Old".to_string(), "OL".to_string());
        CreateCountryDto {
            name: "New".to_string(),
            short_name: "NW".to_string(),
        }
        .apply_to(&mut country);

        assert_eq!(country.id, 4);
        assert_eq!(country.name, "New");
        assert_eq!(country.short_name, "NW");
    }

    #[test]
    fn test_hotels_omitted_unless_loaded() {
        let bare = CountryDto::from(Country::new(1, "Jamaica".to_string(), "JM".to_string()));
        let json = serde_json::to_value(&bare).unwrap();
        assert!(json.get("hotels").is_none());
        assert_eq!(json["shortName"], "JM");

        let mut loaded = Country::new(1, "Jamaica".to_string(), "JM".to_string());
        loaded.hotels = Some(vec![Hotel::new(
            1,
            "Sandals Resort and Spa".to_string(),
            "Negril".to_string(),
            4.5,
            1,
        )]);
        let json = serde_json::to_value(CountryDto::from(loaded)).unwrap();
        assert_eq!(json["hotels"][0]["name"], "Sandals Resort and Spa");
    }
}
