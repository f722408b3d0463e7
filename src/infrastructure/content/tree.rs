//! Page hierarchy loaded from JSON.
//!
//! # Document format
//!
//! ```json
//! {
//!   "default_product_page": "/content/venia/us/en/products/product-page",
//!   "pages": [
//!     { "path": "/content/venia/us/en", "product_page": "/content/venia/us/en/products/product-page" },
//!     { "path": "/content/venia/us/en/products" },
//!     { "path": "/content/venia/us/en/products/product-page" }
//!   ]
//! }
//! ```
//!
//! A page inherits `product_page` from its nearest ancestor page that sets it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentTreeError {
    #[error("failed to read content tree {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content tree document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid page path '{0}': must start with '/' and not end with '/'")]
    InvalidPath(String),

    #[error("duplicate page '{0}'")]
    DuplicatePage(String),

    #[error("product page '{0}' is not a page of the content tree")]
    UnknownProductPage(String),
}

#[derive(Debug, Deserialize)]
struct ContentTreeDocument {
    #[serde(default)]
    default_product_page: Option<String>,
    #[serde(default)]
    pages: Vec<PageNode>,
}

/// A single page of the content tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageNode {
    pub path: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Product detail page configured on this page, inherited by descendants.
    #[serde(default)]
    pub product_page: Option<String>,
}

/// Read-only page hierarchy keyed by path.
#[derive(Debug, Clone)]
pub struct ContentTree {
    pages: HashMap<String, PageNode>,
    default_product_page: Option<String>,
}

impl ContentTree {
    /// Parses and validates a content tree document.
    ///
    /// # Errors
    ///
    /// Returns [`ContentTreeError`] if the JSON is malformed, a path is not
    /// absolute, a page is listed twice, or a product page reference points to
    /// a path that is not a page.
    pub fn from_json(json: &str) -> Result<Self, ContentTreeError> {
        let document: ContentTreeDocument = serde_json::from_str(json)?;

        let mut pages = HashMap::with_capacity(document.pages.len());
        for page in document.pages {
            if !is_valid_path(&page.path) {
                return Err(ContentTreeError::InvalidPath(page.path));
            }
            if pages.contains_key(&page.path) {
                return Err(ContentTreeError::DuplicatePage(page.path));
            }
            pages.insert(page.path.clone(), page);
        }

        let references = pages
            .values()
            .filter_map(|page| page.product_page.as_ref())
            .chain(document.default_product_page.as_ref());
        for reference in references {
            if !pages.contains_key(reference) {
                return Err(ContentTreeError::UnknownProductPage(reference.clone()));
            }
        }

        Ok(Self {
            pages,
            default_product_page: document.default_product_page,
        })
    }

    /// Reads a content tree document from disk.
    pub fn load(path: &Path) -> Result<Self, ContentTreeError> {
        let json = std::fs::read_to_string(path).map_err(|source| ContentTreeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page(&self, path: &str) -> Option<&PageNode> {
        self.pages.get(path)
    }

    /// Pages sorted by path.
    pub fn pages(&self) -> Vec<&PageNode> {
        let mut pages: Vec<&PageNode> = self.pages.values().collect();
        pages.sort_by(|a, b| a.path.cmp(&b.path));
        pages
    }

    pub fn default_product_page(&self) -> Option<&str> {
        self.default_product_page.as_deref()
    }

    /// Returns the page containing `location`: the location itself if it is a
    /// page, otherwise its nearest ancestor page. `/content/site/en/jcr:content`
    /// resolves to `/content/site/en`.
    pub fn containing_page(&self, location: &str) -> Option<&PageNode> {
        let mut current = location.trim_end_matches('/');
        loop {
            if let Some(page) = self.pages.get(current) {
                return Some(page);
            }
            current = parent_path(current)?;
        }
    }

    /// Product page configured on `page` or inherited from its ancestors.
    /// Does not consider the tree-wide default.
    pub fn product_page_for(&self, page: &PageNode) -> Option<&str> {
        let mut current = Some(page.path.as_str());
        while let Some(path) = current {
            if let Some(product_page) = self
                .pages
                .get(path)
                .and_then(|p| p.product_page.as_deref())
            {
                return Some(product_page);
            }
            current = parent_path(path);
        }
        None
    }
}

fn is_valid_path(path: &str) -> bool {
    path.starts_with('/') && (path.len() == 1 || !path.ends_with('/'))
}

/// `/content/a/b` -> `/content/a`; `/content` -> `None`.
fn parent_path(path: &str) -> Option<&str> {
    path.rfind('/').filter(|&idx| idx > 0).map(|idx| &path[..idx])
}
