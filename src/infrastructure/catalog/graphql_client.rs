//! GraphQL catalog client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio_retry::RetryIf;
use tokio_retry::strategy::ExponentialBackoff;
use tracing::{debug, info, warn};

use crate::domain::entities::ProductQuery;
use crate::domain::providers::{CatalogClient, CatalogError};

/// Header carrying the store view code on multi-store catalogs.
const STORE_HEADER: &str = "Store";

/// Connection settings for [`GraphqlCatalogClient`].
#[derive(Debug, Clone)]
pub struct GraphqlCatalogConfig {
    /// GraphQL endpoint, e.g. `https://shop.example.com/graphql`
    pub endpoint: String,
    /// Store view code sent in the `Store` header, if any
    pub store_code: Option<String>,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// Retries for transient failures (transport errors, 429 and 5xx)
    pub max_retries: usize,
}

impl Default for GraphqlCatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:4000/graphql".to_string(),
            store_code: None,
            timeout_ms: 5000,
            max_retries: 2,
        }
    }
}

#[derive(Serialize)]
struct GraphqlRequest<'a, V> {
    query: String,
    #[serde(rename = "operationName", skip_serializing_if = "Option::is_none")]
    operation_name: Option<&'a str>,
    variables: V,
}

#[derive(Serialize)]
struct SkuVariables<'a> {
    sku: &'a str,
}

#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Deserialize)]
struct ProductsData {
    products: Option<ProductList>,
}

#[derive(Deserialize)]
struct ProductList {
    #[serde(default)]
    items: Vec<ProductItem>,
}

#[derive(Deserialize)]
struct ProductItem {
    sku: Option<String>,
    url_key: Option<String>,
}

#[derive(Deserialize)]
struct TypenameData {
    #[serde(rename = "__typename")]
    _typename: Option<String>,
}

/// Client for a commerce GraphQL endpoint.
pub struct GraphqlCatalogClient {
    client: Client,
    endpoint: Url,
    store_code: Option<String>,
    max_retries: usize,
}

impl std::fmt::Debug for GraphqlCatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphqlCatalogClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("store_code", &self.store_code)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl GraphqlCatalogClient {
    /// Creates a catalog client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Transport`] if the endpoint is not a valid URL or
    /// the HTTP client cannot be built.
    pub fn new(config: GraphqlCatalogConfig) -> Result<Self, CatalogError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            CatalogError::Transport(format!("Invalid endpoint '{}': {}", config.endpoint, e))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(format!("commerce-redirect/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatalogError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "Created GraphqlCatalogClient for {}, timeout: {}ms",
            endpoint, config.timeout_ms
        );

        Ok(Self {
            client,
            endpoint,
            store_code: config.store_code,
            max_retries: config.max_retries,
        })
    }

    /// Store view code this client queries, if any.
    pub fn store_code(&self) -> Option<&str> {
        self.store_code.as_deref()
    }

    /// Renders the product-by-SKU document for `query`.
    fn product_document(query: ProductQuery) -> String {
        format!(
            "query {}($sku: String) {{ products(filter: {{ sku: {{ eq: $sku }} }}) {{ items {{ {} }} }} }}",
            query.operation_name(),
            query.selection()
        )
    }

    fn retry_strategy(&self) -> impl Iterator<Item = Duration> + use<> {
        ExponentialBackoff::from_millis(2)
            .factor(50)
            .max_delay(Duration::from_secs(2))
            .take(self.max_retries)
    }

    /// Posts one GraphQL request and returns its `data` member.
    async fn execute<V, T>(&self, request: &GraphqlRequest<'_, V>) -> Result<T, CatalogError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let mut builder = self.client.post(self.endpoint.clone()).json(request);
        if let Some(store) = &self.store_code {
            builder = builder.header(STORE_HEADER, store);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let payload: GraphqlResponse<T> = response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        if !payload.errors.is_empty() {
            let messages: Vec<String> = payload.errors.into_iter().map(|e| e.message).collect();
            return Err(CatalogError::GraphQl(messages.join("; ")));
        }

        payload
            .data
            .ok_or_else(|| CatalogError::Decode("response has no data".to_string()))
    }
}

#[async_trait]
impl CatalogClient for GraphqlCatalogClient {
    async fn fetch_product_url_key_by_sku(
        &self,
        sku: &str,
        query: ProductQuery,
    ) -> Result<String, CatalogError> {
        let request = GraphqlRequest {
            query: Self::product_document(query),
            operation_name: Some(query.operation_name()),
            variables: SkuVariables { sku },
        };

        debug!("Querying catalog for SKU {}", sku);

        let data: ProductsData = RetryIf::spawn(
            self.retry_strategy(),
            || self.execute(&request),
            |e: &CatalogError| {
                let retry = e.is_transient();
                if retry {
                    warn!("Catalog request for SKU {} failed, retrying: {}", sku, e);
                }
                retry
            },
        )
        .await?;

        let items = data.products.map(|p| p.items).unwrap_or_default();

        // `eq` filters may still return several items on some backends.
        let product = items
            .iter()
            .find(|item| item.sku.as_deref() == Some(sku))
            .or_else(|| items.first())
            .ok_or_else(|| CatalogError::ProductNotFound {
                sku: sku.to_string(),
            })?;

        product
            .url_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| CatalogError::MissingUrlKey {
                sku: sku.to_string(),
            })
    }

    async fn health_check(&self) -> bool {
        let request = GraphqlRequest {
            query: "{ __typename }".to_string(),
            operation_name: None,
            variables: serde_json::json!({}),
        };

        match self.execute::<_, TypenameData>(&request).await {
            Ok(_) => true,
            Err(e) => {
                warn!("Catalog health check failed: {}", e);
                false
            }
        }
    }
}
