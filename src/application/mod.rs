//! Application layer services implementing business logic.
//!
//! Services sit between the HTTP handlers and the persistence layer. The
//! country and hotel services open one unit of work per call and commit it
//! once; the auth manager handles registration, login and token checks.
//!
//! # Available Services
//!
//! - [`services::country_service::CountryService`] - Country CRUD and paging
//! - [`services::hotel_service::HotelService`] - Hotel CRUD and paging
//! - [`services::auth_manager::AuthManager`] - Accounts and bearer tokens

pub mod services;
