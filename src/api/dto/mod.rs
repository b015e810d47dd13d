//! Data Transfer Objects for API requests and responses.
//!
//! Wire shapes use camelCase field names. Request DTOs are validated with
//! `validator` and mapped onto entities with `into_new` (create) or
//! `apply_to` (in-place update); responses are built with `From` impls.

pub mod account;
pub mod country;
pub mod health;
pub mod hotel;
pub mod pagination;
