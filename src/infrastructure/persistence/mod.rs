//! PostgreSQL persistence.
//!
//! Countries and hotels are accessed through a [`UnitOfWork`], which owns one
//! transaction and hands out a generic [`Repository`] per entity kind.
//! Accounts are stored by [`PgUserRepository`] directly on the pool.
//!
//! # Components
//!
//! - [`Entity`] - Table metadata and relation loading per entity kind
//! - [`Repository`] - Generic CRUD, lookup and paging
//! - [`UnitOfWork`] - Transaction boundary with a single `save`
//! - [`PgUserRepository`] - Account storage

pub mod entity;
pub mod pg_user_repository;
pub mod repository;
pub mod unit_of_work;

pub use entity::Entity;
pub use pg_user_repository::PgUserRepository;
pub use repository::Repository;
pub use unit_of_work::UnitOfWork;
