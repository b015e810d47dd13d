//! Domain layer containing business entities and contracts.
//!
//! This module is independent of HTTP concerns. It defines the entities,
//! the paging value objects, the typed query specifications used by the
//! generic repository, and the account repository contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`paging`] - Page requests and paged results
//! - [`queries`] - Query specifications and loadable relations
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod paging;
pub mod queries;
pub mod repositories;
