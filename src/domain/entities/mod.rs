//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures. Relations between them are loaded on
//! demand by the persistence layer and stay `None` unless a query asked for
//! them.
//!
//! # Entity Types
//!
//! - [`Country`] - A country owning zero or more hotels
//! - [`Hotel`] - A hotel belonging to exactly one country
//! - [`ApiUser`] - A registered API account
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewCountry`, `NewHotel`, `NewApiUser` - For creating new records

pub mod country;
pub mod hotel;
pub mod user;

pub use country::{Country, NewCountry};
pub use hotel::{Hotel, NewHotel};
pub use user::{ApiUser, NewApiUser, Role};
