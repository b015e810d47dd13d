//! Repository trait definitions for the domain layer.
//!
//! Countries and hotels go through the generic repository owned by a unit
//! of work (see `crate::infrastructure::persistence`). Accounts live outside
//! that transactional core and have their own narrow contract.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Account storage for registration and login

pub mod user_repository;

pub use user_repository::UserRepository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
