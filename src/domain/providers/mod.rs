//! Contracts for the external collaborators of the redirect resolver.
//!
//! The resolver never talks to a catalog, a content repository or a URL
//! service directly; it goes through these traits. Implementations live in
//! `crate::infrastructure`, and mock implementations are generated via
//! `mockall` for unit tests.
//!
//! - [`CatalogClient`] - Looks up a product's URL key by SKU
//! - [`PageResolver`] - Maps a content location to the product root page
//! - [`UrlBuilder`] - Turns a page and identifier parameters into a URL

pub mod catalog_client;
pub mod page_resolver;
pub mod url_builder;

pub use catalog_client::{CatalogClient, CatalogError};
pub use page_resolver::PageResolver;
pub use url_builder::UrlBuilder;

#[cfg(test)]
pub use catalog_client::MockCatalogClient;
#[cfg(test)]
pub use page_resolver::MockPageResolver;
#[cfg(test)]
pub use url_builder::MockUrlBuilder;
