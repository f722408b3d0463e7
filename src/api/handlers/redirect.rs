//! Handler for commerce redirects.

use axum::{
    Extension,
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::api::middleware::raw_path::RawPath;
use crate::domain::entities::{ContentLocation, RedirectRequest};
use crate::error::{AppError, no_details};
use crate::state::AppState;
use crate::utils::request_path::RequestPathInfo;

/// Selector/extension combination the redirect handler is registered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRoute {
    pub selector: String,
    pub extension: String,
}

impl RedirectRoute {
    pub fn new(selector: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            extension: extension.into(),
        }
    }

    pub fn matches(&self, info: &RequestPathInfo) -> bool {
        info.matches(&self.selector, &self.extension)
    }
}

impl Default for RedirectRoute {
    fn default() -> Self {
        Self::new("cifredirect", "html")
    }
}

/// Redirects a product suffix to the canonical product page.
///
/// # Endpoint
///
/// `GET /<content path>.cifredirect.html/<entityType>/<identifier>`
///
/// e.g. `GET /content/venia/us/en.cifredirect.html/product/ABC123`
///
/// # Request Flow
///
/// 1. Decompose the path into resource, selectors, extension and suffix
/// 2. Reject paths that don't carry the registered selector and extension
/// 3. Resolve the suffix with the shared identifier configuration
/// 4. Return 301 Moved Permanently with the product URL in `Location`
///
/// # Errors
///
/// - 400 Bad Request for a missing or malformed suffix
/// - 404 Not Found for foreign selectors/extensions or unknown content
/// - 501 Not Implemented for entity types other than `product`
/// - 502 Bad Gateway if the catalog cannot resolve the SKU
pub async fn redirect_handler(
    Path(path): Path<String>,
    raw_path: Option<Extension<RawPath>>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let mut full_path = format!("/{}", path);
    // A bare "/" suffix is malformed, not missing; undo the trailing-slash trim.
    if raw_path.is_some_and(|Extension(RawPath(raw))| raw.ends_with('/'))
        && !full_path.ends_with('/')
    {
        full_path.push('/');
    }

    let info = RequestPathInfo::parse(&full_path);

    if !state.route.matches(&info) {
        return Err(AppError::not_found("Resource not found.", no_details()));
    }

    let request = RedirectRequest::new(
        info.suffix.as_deref(),
        ContentLocation::new(info.resource_path.as_str()),
    );

    let target = state
        .resolver
        .resolve(&request, &state.identifier_config)
        .await?;

    let location = HeaderValue::try_from(target.url.as_str()).map_err(|_| {
        AppError::internal("Invalid redirect location", json!({ "url": target.url }))
    })?;

    debug!("Redirecting {} to {}", path, target.url);

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
