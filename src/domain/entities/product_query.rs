//! Catalog query descriptors.

/// Named description of the product fields a catalog lookup must return.
///
/// Descriptors are stateless constants; a catalog client renders them into
/// whatever query language it speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductQuery {
    operation: &'static str,
    fields: &'static [&'static str],
}

impl ProductQuery {
    /// Fetches the canonical URL key of a product.
    pub const URL_KEY: Self = Self {
        operation: "ProductUrlKey",
        fields: &["sku", "url_key"],
    };

    pub fn operation_name(&self) -> &'static str {
        self.operation
    }

    /// Space-separated field selection, e.g. `sku url_key`.
    pub fn selection(&self) -> String {
        self.fields.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_key_query_selects_sku_and_url_key() {
        assert_eq!(ProductQuery::URL_KEY.operation_name(), "ProductUrlKey");
        assert_eq!(ProductQuery::URL_KEY.selection(), "sku url_key");
    }
}
