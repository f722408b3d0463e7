//! HTTP middleware for request processing and protection.
//!
//! Provides rate limiting, raw path capture and observability middleware.

pub mod rate_limit;
pub mod raw_path;
pub mod tracing;
