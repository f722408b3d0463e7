//! Keeps the request path as it arrived, before trailing-slash trimming.

use axum::{extract::Request, middleware::Next, response::Response};

/// Request path before [`tower_http::normalize_path`] rewrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPath(pub String);

/// Records the incoming path as a [`RawPath`] request extension.
///
/// Must wrap the path normalizer so it sees the untouched URI.
pub async fn layer(mut request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    request.extensions_mut().insert(RawPath(path));
    next.run(request).await
}
