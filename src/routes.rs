//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`                                   - Health check (catalog, cache)
//! - `GET  /<content>.cifredirect.html/<type>/<id>`  - Commerce redirect
//!
//! # Middleware
//!
//! - **Raw path** - Records the path before normalization
//! - **Path normalization** - Trailing slash handling
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on redirects; `/health` is unthrottled

use crate::api;
use crate::api::middleware::{rate_limit, raw_path, tracing};
use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Constructs the application router with all routes and middleware.
///
/// Serve it with `into_make_service_with_connect_info::<SocketAddr>()`; the
/// rate limiter keys on the peer address.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_per_second` / `rate_burst` - per-IP rate limit on the redirect route
///
/// # Errors
///
/// Returns an error if the rate limit settings are zero.
pub fn app_router(state: AppState, rate_per_second: u64, rate_burst: u32) -> Result<Router> {
    let limiter = rate_limit::layer(rate_per_second, rate_burst)
        .context("Rate limit settings must be greater than zero")?;

    let router = api::routes::health_routes()
        .merge(api::routes::redirect_routes().layer(limiter))
        .with_state(state)
        .layer(tracing::layer());

    let normalized = NormalizePathLayer::trim_trailing_slash().layer(router);

    Ok(Router::new()
        .fallback_service(normalized)
        .layer(middleware::from_fn(raw_path::layer)))
}
