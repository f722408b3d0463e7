//! Shared application state.

use std::sync::Arc;

use crate::api::handlers::RedirectRoute;
use crate::application::services::RedirectResolver;
use crate::domain::entities::IdentifierConfig;
use crate::domain::providers::CatalogClient;
use crate::infrastructure::cache::CacheService;

/// State injected into every handler. Cloning is cheap; everything behind
/// the `Arc`s is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<RedirectResolver>,
    pub identifier_config: Arc<IdentifierConfig>,
    pub route: Arc<RedirectRoute>,
    pub catalog: Arc<dyn CatalogClient>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(
        resolver: RedirectResolver,
        identifier_config: IdentifierConfig,
        route: RedirectRoute,
        catalog: Arc<dyn CatalogClient>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            resolver: Arc::new(resolver),
            identifier_config: Arc::new(identifier_config),
            route: Arc::new(route),
            catalog,
            cache,
        }
    }
}
