//! Product identifier configuration.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which product attribute ends up in generated product URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierType {
    #[default]
    Sku,
    UrlKey,
}

/// Where the identifier is placed in a product URL.
///
/// Only the URL builder reads this; the resolver passes it through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierLocation {
    /// `/content/shop/product.<id>.html`
    #[default]
    Selector,
    /// `/content/shop/product.html/<id>.html`
    Path,
    /// `/content/shop/product.html?sku=<id>`
    Query,
}

/// Identifier settings loaded once at startup and shared read-only by every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentifierConfig {
    pub location: IdentifierLocation,
    pub identifier_type: IdentifierType,
}

impl IdentifierConfig {
    pub fn new(location: IdentifierLocation, identifier_type: IdentifierType) -> Self {
        Self {
            location,
            identifier_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseIdentifierError {
    kind: &'static str,
    value: String,
}

impl FromStr for IdentifierType {
    type Err = ParseIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SKU" => Ok(Self::Sku),
            "URL_KEY" | "URLKEY" => Ok(Self::UrlKey),
            _ => Err(ParseIdentifierError {
                kind: "identifier type",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for IdentifierLocation {
    type Err = ParseIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SELECTOR" => Ok(Self::Selector),
            "PATH" | "SUFFIX" => Ok(Self::Path),
            "QUERY" => Ok(Self::Query),
            _ => Err(ParseIdentifierError {
                kind: "identifier location",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Sku => write!(f, "SKU"),
            Self::UrlKey => write!(f, "URL_KEY"),
        }
    }
}

impl fmt::Display for IdentifierLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Selector => write!(f, "SELECTOR"),
            Self::Path => write!(f, "PATH"),
            Self::Query => write!(f, "QUERY"),
        }
    }
}
