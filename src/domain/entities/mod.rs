//! Value types for the redirect flow.
//!
//! Entities are plain data without I/O. Everything here is either immutable
//! per request ([`RedirectRequest`], [`ResolvedTarget`]) or loaded once at
//! startup and shared read-only ([`IdentifierConfig`]).

pub mod identifier;
pub mod page;
pub mod product_query;
pub mod redirect;

pub use identifier::{IdentifierConfig, IdentifierLocation, IdentifierType, ParseIdentifierError};
pub use page::{ContentLocation, PageRef};
pub use product_query::ProductQuery;
pub use redirect::{PRODUCT_ENTITY, ProductUrlParams, RedirectRequest, RedirectSuffix, ResolvedTarget};
