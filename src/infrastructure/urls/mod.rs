//! Product URL generation.

mod template_url_builder;

pub use template_url_builder::TemplateUrlBuilder;
