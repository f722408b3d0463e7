//! HTTP request handlers.

pub mod health;
pub mod redirect;

pub use health::health_handler;
pub use redirect::{RedirectRoute, redirect_handler};
