//! Redirect resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::{
    ContentLocation, IdentifierConfig, IdentifierType, PRODUCT_ENTITY, ProductQuery,
    ProductUrlParams, RedirectRequest, RedirectSuffix, ResolvedTarget,
};
use crate::domain::providers::{CatalogClient, PageResolver, UrlBuilder};
use crate::error::{AppError, no_details};

pub const MISSING_SUFFIX: &str = "Missing redirect suffix.";
pub const WRONG_SUFFIX_FORMAT: &str = "Redirect suffix has wrong format.";
pub const REDIRECT_NOT_AVAILABLE: &str = "The requested redirect is not available.";
pub const PRODUCT_NOT_RESOLVED: &str = "The requested product could not be resolved.";

/// Resolves redirect suffixes such as `/product/ABC123` to canonical page URLs.
///
/// Holds no mutable state; one instance is shared by all requests.
pub struct RedirectResolver {
    catalog: Arc<dyn CatalogClient>,
    pages: Arc<dyn PageResolver>,
    urls: Arc<dyn UrlBuilder>,
}

impl RedirectResolver {
    /// Creates a new redirect resolver.
    pub fn new(
        catalog: Arc<dyn CatalogClient>,
        pages: Arc<dyn PageResolver>,
        urls: Arc<dyn UrlBuilder>,
    ) -> Self {
        Self {
            catalog,
            pages,
            urls,
        }
    }

    /// Resolves a redirect request to its target URL.
    ///
    /// # Flow
    ///
    /// 1. Validate that a suffix is present and has exactly two segments
    /// 2. Dispatch on the entity-type segment (only `product` is supported)
    /// 3. Resolve the product root page for the originating location
    /// 4. Build URL parameters from the SKU, or from the URL key looked up in
    ///    the catalog when `config.identifier_type` is [`IdentifierType::UrlKey`]
    /// 5. Ask the URL builder for the final URL
    ///
    /// # Errors
    ///
    /// - [`AppError::BadRequest`] - missing or malformed suffix
    /// - [`AppError::NotImplemented`] - unsupported entity type
    /// - [`AppError::UpstreamLookupFailure`] - the catalog could not resolve the SKU
    /// - Errors of the page resolver and URL builder are passed through
    pub async fn resolve(
        &self,
        request: &RedirectRequest<'_>,
        config: &IdentifierConfig,
    ) -> Result<ResolvedTarget, AppError> {
        let suffix = request
            .suffix
            .ok_or_else(|| AppError::bad_request(MISSING_SUFFIX, no_details()))?;

        let parsed = RedirectSuffix::parse(suffix).ok_or_else(|| {
            AppError::bad_request(WRONG_SUFFIX_FORMAT, json!({ "suffix": suffix }))
        })?;

        match parsed.entity_type {
            PRODUCT_ENTITY => {
                self.redirect_to_product(parsed.identifier, &request.originating_location, config)
                    .await
            }
            other => {
                debug!("No redirect registered for entity type '{}'", other);
                Err(AppError::not_implemented(
                    REDIRECT_NOT_AVAILABLE,
                    json!({ "entity_type": other }),
                ))
            }
        }
    }

    async fn redirect_to_product(
        &self,
        sku: &str,
        location: &ContentLocation,
        config: &IdentifierConfig,
    ) -> Result<ResolvedTarget, AppError> {
        let root_page = self.pages.get_product_root_page(location).await?;

        let params = match config.identifier_type {
            IdentifierType::Sku => ProductUrlParams::from_sku(sku),
            IdentifierType::UrlKey => {
                let url_key = self
                    .catalog
                    .fetch_product_url_key_by_sku(sku, ProductQuery::URL_KEY)
                    .await
                    .map_err(|e| {
                        warn!("Catalog lookup for SKU {} failed: {}", sku, e);
                        AppError::upstream_lookup_failure(PRODUCT_NOT_RESOLVED, json!({ "sku": sku }))
                    })?;
                ProductUrlParams::from_url_key(url_key)
            }
        };

        let url = self.urls.to_product_url(&root_page, &params)?;
        if url.is_empty() {
            return Err(AppError::internal(
                "Product URL is empty",
                json!({ "page": root_page.path() }),
            ));
        }

        debug!("Resolved SKU {} via {} to {}", sku, root_page, url);

        Ok(ResolvedTarget { url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{IdentifierLocation, PageRef};
    use crate::domain::providers::{
        CatalogError, MockCatalogClient, MockPageResolver, MockUrlBuilder,
    };

    const PRODUCT_PAGE: &str = "/content/venia/us/en/products/product-page";

    fn sku_config() -> IdentifierConfig {
        IdentifierConfig::new(IdentifierLocation::Selector, IdentifierType::Sku)
    }

    fn url_key_config() -> IdentifierConfig {
        IdentifierConfig::new(IdentifierLocation::Selector, IdentifierType::UrlKey)
    }

    fn request(suffix: Option<&str>) -> RedirectRequest<'_> {
        RedirectRequest::new(suffix, ContentLocation::new("/content/venia/us/en"))
    }

    fn page_resolver() -> MockPageResolver {
        let mut pages = MockPageResolver::new();
        pages
            .expect_get_product_root_page()
            .returning(|_| Ok(PageRef::new(PRODUCT_PAGE)));
        pages
    }

    fn untouched_collaborators() -> RedirectResolver {
        let mut catalog = MockCatalogClient::new();
        catalog.expect_fetch_product_url_key_by_sku().times(0);
        let mut pages = MockPageResolver::new();
        pages.expect_get_product_root_page().times(0);
        let mut urls = MockUrlBuilder::new();
        urls.expect_to_product_url().times(0);

        RedirectResolver::new(Arc::new(catalog), Arc::new(pages), Arc::new(urls))
    }

    #[tokio::test]
    async fn test_missing_suffix_is_bad_request() {
        let resolver = untouched_collaborators();

        let result = resolver.resolve(&request(None), &sku_config()).await;

        match result.unwrap_err() {
            AppError::BadRequest { message, .. } => assert_eq!(message, MISSING_SUFFIX),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_wrong_segment_count_is_bad_request() {
        let resolver = untouched_collaborators();

        for suffix in ["/product", "/product/A/B", "/", "/product//A"] {
            let result = resolver.resolve(&request(Some(suffix)), &sku_config()).await;

            match result.unwrap_err() {
                AppError::BadRequest { message, .. } => {
                    assert_eq!(message, WRONG_SUFFIX_FORMAT, "suffix {}", suffix)
                }
                other => panic!("unexpected error for {}: {:?}", suffix, other),
            }
        }
    }

    #[tokio::test]
    async fn test_unsupported_entity_type_is_not_implemented() {
        let resolver = untouched_collaborators();

        let result = resolver
            .resolve(&request(Some("/category/5")), &url_key_config())
            .await;

        match result.unwrap_err() {
            AppError::NotImplemented { message, .. } => {
                assert_eq!(message, REDIRECT_NOT_AVAILABLE)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_sku_mode_builds_url_without_catalog_call() {
        let mut catalog = MockCatalogClient::new();
        catalog.expect_fetch_product_url_key_by_sku().times(0);

        let mut urls = MockUrlBuilder::new();
        urls.expect_to_product_url()
            .withf(|page, params| {
                page.path() == PRODUCT_PAGE && *params == ProductUrlParams::from_sku("ABC123")
            })
            .times(1)
            .returning(|page, _| Ok(format!("{}.ABC123.html", page.path())));

        let resolver =
            RedirectResolver::new(Arc::new(catalog), Arc::new(page_resolver()), Arc::new(urls));

        let target = resolver
            .resolve(&request(Some("/product/ABC123")), &sku_config())
            .await
            .unwrap();

        assert_eq!(target.url, format!("{}.ABC123.html", PRODUCT_PAGE));
    }

    #[tokio::test]
    async fn test_url_key_mode_uses_catalog_url_key() {
        let mut catalog = MockCatalogClient::new();
        catalog
            .expect_fetch_product_url_key_by_sku()
            .withf(|sku, query| sku == "ABC123" && *query == ProductQuery::URL_KEY)
            .times(1)
            .returning(|_, _| Ok("blue-shirt".to_string()));

        let mut urls = MockUrlBuilder::new();
        urls.expect_to_product_url()
            .withf(|_, params| *params == ProductUrlParams::from_url_key("blue-shirt"))
            .times(1)
            .returning(|page, _| Ok(format!("{}.blue-shirt.html", page.path())));

        let resolver =
            RedirectResolver::new(Arc::new(catalog), Arc::new(page_resolver()), Arc::new(urls));

        let target = resolver
            .resolve(&request(Some("/product/ABC123")), &url_key_config())
            .await
            .unwrap();

        assert_eq!(target.url, format!("{}.blue-shirt.html", PRODUCT_PAGE));
    }

    #[tokio::test]
    async fn test_catalog_failure_is_upstream_lookup_failure() {
        let mut catalog = MockCatalogClient::new();
        catalog
            .expect_fetch_product_url_key_by_sku()
            .times(1)
            .returning(|sku, _| {
                Err(CatalogError::ProductNotFound {
                    sku: sku.to_string(),
                })
            });

        let mut urls = MockUrlBuilder::new();
        urls.expect_to_product_url().times(0);

        let resolver =
            RedirectResolver::new(Arc::new(catalog), Arc::new(page_resolver()), Arc::new(urls));

        let result = resolver
            .resolve(&request(Some("/product/UNKNOWN")), &url_key_config())
            .await;

        match result.unwrap_err() {
            AppError::UpstreamLookupFailure { message, details } => {
                assert_eq!(message, PRODUCT_NOT_RESOLVED);
                assert_eq!(details["sku"], "UNKNOWN");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_page_resolver_error_is_passed_through() {
        let mut pages = MockPageResolver::new();
        pages
            .expect_get_product_root_page()
            .times(1)
            .returning(|_| Err(AppError::not_found("Resource not found.", no_details())));

        let mut catalog = MockCatalogClient::new();
        catalog.expect_fetch_product_url_key_by_sku().times(0);
        let mut urls = MockUrlBuilder::new();
        urls.expect_to_product_url().times(0);

        let resolver = RedirectResolver::new(Arc::new(catalog), Arc::new(pages), Arc::new(urls));

        let result = resolver
            .resolve(&request(Some("/product/ABC123")), &url_key_config())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_empty_url_is_rejected() {
        let mut urls = MockUrlBuilder::new();
        urls.expect_to_product_url()
            .times(1)
            .returning(|_, _| Ok(String::new()));

        let resolver = RedirectResolver::new(
            Arc::new(MockCatalogClient::new()),
            Arc::new(page_resolver()),
            Arc::new(urls),
        );

        let result = resolver
            .resolve(&request(Some("/product/ABC123")), &sku_config())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
