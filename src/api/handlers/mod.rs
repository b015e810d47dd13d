//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod accounts;
pub mod countries;
pub mod health;
pub mod hotels;

pub use accounts::{login_handler, register_handler};
pub use countries::{
    create_country_handler, delete_country_handler, get_country_handler,
    list_all_countries_handler, list_countries_handler, update_country_handler,
};
pub use health::health_handler;
pub use hotels::{
    create_hotel_handler, delete_hotel_handler, get_hotel_handler, list_hotels_handler,
    update_hotel_handler,
};
