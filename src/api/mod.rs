//! HTTP layer for request/response handling.
//!
//! Translates storefront requests into resolver calls and resolver results
//! into HTTP responses.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting and observability middleware
//! - [`routes`] - Route registration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
