//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with collaborator checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Catalog**: Sends a `{ __typename }` query to the GraphQL endpoint
/// 2. **Cache**: Tests the cache backend (always ok when caching is disabled)
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "catalog": { "status": "ok", "message": "Catalog reachable" },
///     "cache": { "status": "ok", "message": "Cache backend: redis" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let catalog_check = check_catalog(&state).await;

    let cache_check = check_cache(&state).await;

    let all_healthy = catalog_check.status == "ok" && cache_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            catalog: catalog_check,
            cache: cache_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_catalog(state: &AppState) -> CheckStatus {
    if state.catalog.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Catalog reachable".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Catalog unreachable".to_string()),
        }
    }
}

async fn check_cache(state: &AppState) -> CheckStatus {
    let backend = state.cache.backend();
    if state.cache.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Cache backend: {}", backend)),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Cache backend {} unreachable", backend)),
        }
    }
}
