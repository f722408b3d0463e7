//! Page resolver backed by the content tree.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use super::tree::ContentTree;
use crate::domain::entities::{ContentLocation, PageRef};
use crate::domain::providers::PageResolver;
use crate::error::AppError;

/// Resolves the product root page by walking the content tree upwards from
/// the requested location, falling back to the tree-wide default.
pub struct ContentTreePageResolver {
    tree: Arc<ContentTree>,
}

impl ContentTreePageResolver {
    pub fn new(tree: Arc<ContentTree>) -> Self {
        Self { tree }
    }
}

#[async_trait]
impl PageResolver for ContentTreePageResolver {
    async fn get_product_root_page(&self, location: &ContentLocation) -> Result<PageRef, AppError> {
        let page = self.tree.containing_page(location.as_str()).ok_or_else(|| {
            AppError::not_found(
                "Resource not found.",
                json!({ "location": location.as_str() }),
            )
        })?;

        let product_page = self
            .tree
            .product_page_for(page)
            .or_else(|| self.tree.default_product_page())
            .ok_or_else(|| {
                AppError::internal(
                    "No product page configured.",
                    json!({ "page": page.path }),
                )
            })?;

        debug!("Product root page for {} is {}", page.path, product_page);

        Ok(PageRef::new(product_page))
    }
}
