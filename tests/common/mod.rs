#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use commerce_redirect::api::handlers::RedirectRoute;
use commerce_redirect::api::routes::public_routes;
use commerce_redirect::application::services::RedirectResolver;
use commerce_redirect::domain::entities::{IdentifierConfig, IdentifierLocation, IdentifierType, ProductQuery};
use commerce_redirect::domain::providers::{CatalogClient, CatalogError};
use commerce_redirect::infrastructure::cache::NullCache;
use commerce_redirect::infrastructure::content::{ContentTree, ContentTreePageResolver};
use commerce_redirect::infrastructure::urls::TemplateUrlBuilder;
use commerce_redirect::routes::app_router;
use commerce_redirect::state::AppState;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const PRODUCT_PAGE: &str = "/content/venia/us/en/products/product-page";

pub const CONTENT_TREE: &str = r#"{
    "pages": [
        { "path": "/content/venia", "title": "Venia" },
        { "path": "/content/venia/us/en", "product_page": "/content/venia/us/en/products/product-page" },
        { "path": "/content/venia/us/en/products" },
        { "path": "/content/venia/us/en/products/product-page" }
    ]
}"#;

/// In-memory catalog keyed by SKU that counts lookups.
#[derive(Default)]
pub struct FakeCatalog {
    url_keys: HashMap<String, String>,
    lookups: AtomicUsize,
    healthy: bool,
}

impl FakeCatalog {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            url_keys: entries
                .iter()
                .map(|(sku, url_key)| (sku.to_string(), url_key.to_string()))
                .collect(),
            lookups: AtomicUsize::new(0),
            healthy: true,
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            healthy: false,
            ..Default::default()
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogClient for FakeCatalog {
    async fn fetch_product_url_key_by_sku(
        &self,
        sku: &str,
        _query: ProductQuery,
    ) -> Result<String, CatalogError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.url_keys
            .get(sku)
            .cloned()
            .ok_or_else(|| CatalogError::ProductNotFound {
                sku: sku.to_string(),
            })
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }
}

pub fn create_test_state(identifier_type: IdentifierType, catalog: Arc<FakeCatalog>) -> AppState {
    let tree = ContentTree::from_json(CONTENT_TREE).unwrap();
    let pages = Arc::new(ContentTreePageResolver::new(Arc::new(tree)));
    let urls = Arc::new(TemplateUrlBuilder::new(IdentifierLocation::Selector, "html", None));

    let resolver = RedirectResolver::new(catalog.clone(), pages, urls);

    AppState::new(
        resolver,
        IdentifierConfig::new(IdentifierLocation::Selector, identifier_type),
        RedirectRoute::default(),
        catalog,
        Arc::new(NullCache::new()),
    )
}

pub fn create_test_server(state: AppState) -> TestServer {
    let app: Router = public_routes().with_state(state);
    TestServer::new(app).unwrap()
}

/// Serves the full middleware stack on an ephemeral port and returns its base URL.
pub async fn spawn_app(state: AppState, rate_per_second: u64, rate_burst: u32) -> String {
    let app = app_router(state, rate_per_second, rate_burst).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    format!("http://{}", addr)
}

/// HTTP client that reports redirects instead of following them.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
