//! Business logic services for the application layer.

pub mod auth_manager;
pub mod country_service;
pub mod hotel_service;

pub use auth_manager::{AuthManager, Registration};
pub use country_service::CountryService;
pub use hotel_service::HotelService;
