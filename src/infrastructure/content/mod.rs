//! Content tree and page resolution.
//!
//! - [`ContentTree`] - Page hierarchy loaded once from a JSON document
//! - [`ContentTreePageResolver`] - [`crate::domain::providers::PageResolver`] on top of it

mod page_resolver;
mod tree;

pub use page_resolver::ContentTreePageResolver;
pub use tree::{ContentTree, ContentTreeError, PageNode};
