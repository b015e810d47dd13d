//! Infrastructure layer for external integrations.
//!
//! This layer implements the persistence side of the domain: the generic
//! repository, the unit of work that owns one transaction per request, and
//! the account repository. Password hashing and token signing live in
//! [`security`].
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repositories and unit of work
//! - [`security`] - Argon2 password hashing and JWT signing

pub mod persistence;
pub mod security;
