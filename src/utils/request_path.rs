//! Request path decomposition.
//!
//! Storefront URLs address a content resource and then narrow the request
//! down with selectors, an extension and a suffix:
//!
//! ```text
//! /content/venia/us/en.cifredirect.html/product/ABC123
//! └──── resource ────┘ └─selector─┘ └ext┘└── suffix ──┘
//! ```

/// Parts of a request path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestPathInfo {
    pub resource_path: String,
    pub selectors: Vec<String>,
    pub extension: Option<String>,
    pub suffix: Option<String>,
}

impl RequestPathInfo {
    /// Splits `path` into its parts.
    ///
    /// The first `.` starts the selector/extension block and the first `/`
    /// after it starts the suffix. A path without a dot is all resource path.
    /// An empty suffix is treated as absent.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let info = RequestPathInfo::parse("/content/site/en.cifredirect.html/product/ABC123");
    /// assert_eq!(info.resource_path, "/content/site/en");
    /// assert_eq!(info.selectors, vec!["cifredirect"]);
    /// assert_eq!(info.extension.as_deref(), Some("html"));
    /// assert_eq!(info.suffix.as_deref(), Some("/product/ABC123"));
    /// ```
    pub fn parse(path: &str) -> Self {
        let Some(dot) = path.find('.') else {
            return Self {
                resource_path: path.to_string(),
                ..Default::default()
            };
        };

        let resource_path = &path[..dot];
        let rest = &path[dot + 1..];

        let (block, suffix) = match rest.find('/') {
            Some(slash) => (&rest[..slash], Some(&rest[slash..])),
            None => (rest, None),
        };

        let mut parts: Vec<&str> = block.split('.').collect();
        let extension = parts.pop().filter(|ext| !ext.is_empty());

        Self {
            resource_path: resource_path.to_string(),
            selectors: parts
                .into_iter()
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            extension: extension.map(str::to_string),
            suffix: suffix.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }

    /// True when the selectors are exactly `[selector]` and the extension is `extension`.
    pub fn matches(&self, selector: &str, extension: &str) -> bool {
        self.selectors.len() == 1
            && self.selectors[0] == selector
            && self.extension.as_deref() == Some(extension)
    }
}
