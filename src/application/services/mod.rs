//! Business logic services for the application layer.

pub mod redirect_resolver;

pub use redirect_resolver::RedirectResolver;
