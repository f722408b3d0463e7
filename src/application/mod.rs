//! Application layer services implementing the redirect flow.
//!
//! Services consume the provider traits from [`crate::domain::providers`] and
//! expose a small API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::redirect_resolver::RedirectResolver`] - Suffix validation, dispatch and product URL resolution

pub mod services;
