//! HTTP server initialization and runtime setup.
//!
//! Wires collaborators into the resolver, builds the router and runs the
//! Axum server lifecycle.

use crate::api::handlers::RedirectRoute;
use crate::application::services::RedirectResolver;
use crate::config::Config;
use crate::domain::providers::CatalogClient;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::catalog::{CachedCatalogClient, GraphqlCatalogClient};
use crate::infrastructure::content::{ContentTree, ContentTreePageResolver};
use crate::infrastructure::urls::TemplateUrlBuilder;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Connects the cache, or falls back to [`NullCache`] when Redis is not
/// configured or unreachable.
pub async fn connect_cache(config: &Config) -> Arc<dyn CacheService> {
    if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        }
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    }
}

/// Creates the GraphQL catalog client behind the URL-key cache. Entries are
/// namespaced by store view code (`default` when none is configured).
///
/// # Errors
///
/// Returns an error if the catalog endpoint is invalid.
pub fn cached_catalog(
    config: &Config,
    cache: Arc<dyn CacheService>,
) -> Result<CachedCatalogClient<GraphqlCatalogClient>> {
    let graphql = GraphqlCatalogClient::new(config.catalog_config())
        .context("Failed to create catalog client")?;
    let namespace = graphql.store_code().unwrap_or("default").to_string();
    Ok(CachedCatalogClient::new(graphql, cache, namespace))
}

/// Builds the application state from configuration.
///
/// Loads the content tree, creates the catalog client (wrapped in the cache)
/// and the URL builder, and hands them to a [`RedirectResolver`].
///
/// # Errors
///
/// Returns an error if the content tree cannot be loaded or the catalog
/// client or public base URL is misconfigured.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let cache = connect_cache(config).await;

    let catalog: Arc<dyn CatalogClient> = Arc::new(cached_catalog(config, cache.clone())?);

    let tree = ContentTree::load(&config.content_tree_path).with_context(|| {
        format!(
            "Failed to load content tree from {}",
            config.content_tree_path.display()
        )
    })?;
    tracing::info!("Loaded content tree with {} pages", tree.len());
    let pages = Arc::new(ContentTreePageResolver::new(Arc::new(tree)));

    let base_url = config
        .public_base_url
        .as_deref()
        .map(url::Url::parse)
        .transpose()
        .context("Invalid PUBLIC_BASE_URL")?;
    let urls = Arc::new(TemplateUrlBuilder::new(
        config.identifier_config.location,
        config.redirect_extension.clone(),
        base_url,
    ));

    let resolver = RedirectResolver::new(catalog.clone(), pages, urls);

    Ok(AppState::new(
        resolver,
        config.identifier_config,
        RedirectRoute::new(
            config.redirect_selector.clone(),
            config.redirect_extension.clone(),
        ),
        catalog,
        cache,
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - State construction fails (see [`build_state`])
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state, config.rate_limit_per_second, config.rate_limit_burst)?;

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
