//! Route registration for the redirect service.

use crate::api::handlers::{health_handler, redirect_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// `GET /health` - Collaborator health check.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}

/// `GET /{*path}` - Catch-all dispatched to the redirect handler, which
/// matches the selector/extension from [`AppState::route`].
pub fn redirect_routes() -> Router<AppState> {
    Router::new().route("/{*path}", get(redirect_handler))
}

/// Public routes without middleware.
///
/// Static routes take precedence over the catch-all, so `/health` never
/// reaches the redirect handler.
pub fn public_routes() -> Router<AppState> {
    health_routes().merge(redirect_routes())
}
