//! HTTP middleware for request processing and protection.
//!
//! Provides authentication, rate limiting, response headers, entity tags
//! and observability middleware.

pub mod auth;
pub mod etag;
pub mod headers;
pub mod panic;
pub mod rate_limit;
pub mod tracing;
