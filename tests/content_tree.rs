mod common;

use commerce_redirect::domain::entities::ContentLocation;
use commerce_redirect::domain::providers::PageResolver;
use commerce_redirect::infrastructure::content::{
    ContentTree, ContentTreeError, ContentTreePageResolver,
};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn write_tree(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(json.as_bytes())
        .expect("Failed to write content tree");
    file.flush().expect("Failed to flush file");
    file
}

#[tokio::test]
async fn test_load_and_resolve_from_file() {
    let file = write_tree(common::CONTENT_TREE);

    let tree = ContentTree::load(file.path()).unwrap();
    assert_eq!(tree.len(), 4);

    let resolver = ContentTreePageResolver::new(Arc::new(tree));
    let page = resolver
        .get_product_root_page(&ContentLocation::new("/content/venia/us/en/products"))
        .await
        .unwrap();

    assert_eq!(page.path(), common::PRODUCT_PAGE);
}

#[test]
fn test_load_missing_file() {
    let result = ContentTree::load(Path::new("/nonexistent/content.json"));

    assert!(matches!(result, Err(ContentTreeError::Io { .. })));
}

#[test]
fn test_load_malformed_file() {
    let file = write_tree("{ \"pages\": [");

    let result = ContentTree::load(file.path());

    assert!(matches!(result, Err(ContentTreeError::Parse(_))));
}

#[test]
fn test_bundled_sample_tree_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("content.json");

    let tree = ContentTree::load(&path).unwrap();

    assert!(!tree.is_empty());
    assert!(tree.default_product_page().is_some());
}
