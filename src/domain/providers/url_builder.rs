//! Product URL generation contract.

use crate::domain::entities::{PageRef, ProductUrlParams};
use crate::error::AppError;

/// Builds the public URL of a product detail page.
///
/// Implementations decide where the identifier goes (selector, path, query)
/// based on their own identifier-location configuration.
#[cfg_attr(test, mockall::automock)]
pub trait UrlBuilder: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if `params` carries no identifier or the
    /// URL cannot be formed.
    fn to_product_url(&self, root_page: &PageRef, params: &ProductUrlParams)
    -> Result<String, AppError>;
}
