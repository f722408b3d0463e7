//! Redirect request, parsed suffix and resolution result.

use super::page::ContentLocation;

/// Entity-type tag of product redirects (`/product/<sku>`).
pub const PRODUCT_ENTITY: &str = "product";

/// An incoming redirect request.
#[derive(Debug, Clone)]
pub struct RedirectRequest<'a> {
    /// Raw path tail after the resource, e.g. `/product/ABC123`. `None` when the
    /// request carried no suffix at all.
    pub suffix: Option<&'a str>,
    pub originating_location: ContentLocation,
}

impl<'a> RedirectRequest<'a> {
    pub fn new(suffix: Option<&'a str>, originating_location: ContentLocation) -> Self {
        Self {
            suffix,
            originating_location,
        }
    }
}

/// A suffix of the form `/<entityType>/<identifier>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectSuffix<'a> {
    pub entity_type: &'a str,
    pub identifier: &'a str,
}

impl<'a> RedirectSuffix<'a> {
    /// Parses a suffix into its two segments.
    ///
    /// The leading separator is stripped and trailing empty segments are
    /// ignored, so `/product/A/` parses like `/product/A`. Anything that does
    /// not leave exactly two non-empty segments is rejected.
    pub fn parse(suffix: &'a str) -> Option<Self> {
        let trimmed = suffix.strip_prefix('/').unwrap_or(suffix);

        let mut segments: Vec<&str> = trimmed.split('/').collect();
        while segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }

        match segments.as_slice() {
            [entity_type, identifier] if !entity_type.is_empty() && !identifier.is_empty() => {
                Some(Self {
                    entity_type: *entity_type,
                    identifier: *identifier,
                })
            }
            _ => None,
        }
    }
}

/// URL parameters handed to the URL builder. Exactly one field is set by the
/// resolver depending on the configured identifier type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUrlParams {
    pub sku: Option<String>,
    pub url_key: Option<String>,
}

impl ProductUrlParams {
    pub fn from_sku(sku: impl Into<String>) -> Self {
        Self {
            sku: Some(sku.into()),
            url_key: None,
        }
    }

    pub fn from_url_key(url_key: impl Into<String>) -> Self {
        Self {
            sku: None,
            url_key: Some(url_key.into()),
        }
    }

    /// The identifier to place in the URL together with its parameter name.
    /// A URL key wins over a SKU when both are present.
    pub fn identifier(&self) -> Option<(&'static str, &str)> {
        match (&self.url_key, &self.sku) {
            (Some(url_key), _) => Some(("url_key", url_key.as_str())),
            (None, Some(sku)) => Some(("sku", sku.as_str())),
            (None, None) => None,
        }
    }
}

/// Outcome of a successful resolution: the `Location` of a `301` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_suffix() {
        let parsed = RedirectSuffix::parse("/product/ABC123").unwrap();
        assert_eq!(parsed.entity_type, "product");
        assert_eq!(parsed.identifier, "ABC123");
    }

    #[test]
    fn test_parse_ignores_single_trailing_slash() {
        let parsed = RedirectSuffix::parse("/product/ABC123/").unwrap();
        assert_eq!(parsed.identifier, "ABC123");
    }

    #[test]
    fn test_parse_rejects_wrong_segment_count() {
        assert!(RedirectSuffix::parse("/product").is_none());
        assert!(RedirectSuffix::parse("/product/A/B").is_none());
        assert!(RedirectSuffix::parse("/").is_none());
        assert!(RedirectSuffix::parse("").is_none());
    }

    #[test]
    fn test_parse_rejects_empty_segments() {
        assert!(RedirectSuffix::parse("//ABC123").is_none());
        assert!(RedirectSuffix::parse("/product//ABC123").is_none());
    }

    #[test]
    fn test_params_identifier_prefers_url_key() {
        let params = ProductUrlParams {
            sku: Some("ABC123".to_string()),
            url_key: Some("blue-shirt".to_string()),
        };
        assert_eq!(params.identifier(), Some(("url_key", "blue-shirt")));
        assert_eq!(
            ProductUrlParams::from_sku("ABC123").identifier(),
            Some(("sku", "ABC123"))
        );
        assert_eq!(ProductUrlParams::default().identifier(), None);
    }
}
