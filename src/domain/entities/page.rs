//! Content locations and page references.

use std::fmt;

/// Content path of the resource a redirect request was made against,
/// e.g. `/content/venia/us/en`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentLocation(String);

impl ContentLocation {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to a content page, such as the product detail root page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRef {
    path: String,
}

impl PageRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.path)
    }
}
