//! Content page lookup contract.

use async_trait::async_trait;

use crate::domain::entities::{ContentLocation, PageRef};
use crate::error::AppError;

/// Maps the content location a request originated from to the page
/// configured as the landing location for product detail pages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageResolver: Send + Sync {
    /// Returns the product root page for `location`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `location` does not belong to any
    /// known page, [`AppError::Internal`] if no product page is configured.
    async fn get_product_root_page(&self, location: &ContentLocation) -> Result<PageRef, AppError>;
}
