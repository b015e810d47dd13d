//! Credential hashing and bearer token signing.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtSigner};
pub use password::PasswordHasher;
