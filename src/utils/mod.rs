//! Utility functions for request handling.
//!
//! - [`request_path`] - Decomposition of request paths into resource, selectors, extension and suffix

pub mod request_path;
