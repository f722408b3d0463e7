//! Product URL builder following the storefront's page URL conventions.

use serde_json::json;
use url::{Url, form_urlencoded};

use crate::domain::entities::{IdentifierLocation, PageRef, ProductUrlParams};
use crate::domain::providers::UrlBuilder;
use crate::error::AppError;

/// Builds product page URLs from the product root page and an identifier.
///
/// | Location   | URL                                  |
/// |------------|--------------------------------------|
/// | `Selector` | `<page>.<id>.<ext>`                  |
/// | `Path`     | `<page>.<ext>/<id>.<ext>`            |
/// | `Query`    | `<page>.<ext>?sku=<id>` / `?url_key=` |
///
/// With a base URL the result is absolute, otherwise it is a site-relative path.
#[derive(Debug, Clone)]
pub struct TemplateUrlBuilder {
    location: IdentifierLocation,
    extension: String,
    base_url: Option<Url>,
}

impl TemplateUrlBuilder {
    /// `base_url` may carry a path prefix such as `https://shop.example.com/store`;
    /// product URLs are placed below it.
    pub fn new(location: IdentifierLocation, extension: impl Into<String>, base_url: Option<Url>) -> Self {
        Self {
            location,
            extension: extension.into(),
            base_url: base_url.map(with_trailing_slash),
        }
    }

    fn relative_url(&self, page: &str, name: &str, identifier: &str) -> String {
        let ext = &self.extension;
        match self.location {
            IdentifierLocation::Selector => format!("{}.{}.{}", page, encode_segment(identifier), ext),
            IdentifierLocation::Path => format!("{}.{}/{}.{}", page, ext, encode_segment(identifier), ext),
            IdentifierLocation::Query => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair(name, identifier)
                    .finish();
                format!("{}.{}?{}", page, ext, query)
            }
        }
    }
}

impl UrlBuilder for TemplateUrlBuilder {
    fn to_product_url(&self, root_page: &PageRef, params: &ProductUrlParams) -> Result<String, AppError> {
        let (name, identifier) = params.identifier().ok_or_else(|| {
            AppError::internal("Missing product identifier", json!({ "page": root_page.path() }))
        })?;

        let relative = self.relative_url(root_page.path(), name, identifier);

        match &self.base_url {
            // "./" keeps a leading segment containing ':' from parsing as a scheme.
            Some(base) => base
                .join(&format!("./{}", relative.trim_start_matches('/')))
                .map(|url| url.to_string())
                .map_err(|e| {
                    AppError::internal(
                        "Invalid product URL",
                        json!({ "url": relative, "reason": e.to_string() }),
                    )
                }),
            None => Ok(relative),
        }
    }
}

/// Makes `base` a directory URL so relative joins append to its path.
fn with_trailing_slash(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

/// Percent-encodes an identifier for use inside a path segment.
fn encode_segment(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
