//! Startup-to-edit flow through the public API.

use cookbook_core::attachment::encode_data_uri;
use cookbook_core::error::{Error, StoreError};
use cookbook_core::types::{CatalogConfig, RecipeDraft, RecipeRef};
use cookbook_core::RecipeStore;
use tempfile::TempDir;

const DOCUMENT: &str = r#"<?xml version="1.0"?>
<recipes>
  <recipe>
    <title>Tomato Soup</title>
    <about>A warm starter</about>
    <ingredients><ingredient>Tomato</ingredient><ingredient>Basil</ingredient></ingredients>
    <instructions>Simmer.</instructions>
  </recipe>
  <recipe>
    <title>Pepper stew</title>
    <about>Hot</about>
    <ingredients><ingredient>Salt</ingredient></ingredients>
    <instructions>Stew.</instructions>
  </recipe>
</recipes>
"#;

fn write_catalog(dir: &TempDir, text: &str) -> CatalogConfig {
    let config = CatalogConfig::default();
    let path = config.source_path(dir.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, text).unwrap();
    config
}

#[test]
fn test_open_edit_and_serialize() {
    let dir = TempDir::new().unwrap();
    let config = write_catalog(&dir, DOCUMENT);

    let mut store = RecipeStore::open(&config, dir.path()).unwrap();
    assert_eq!(store.len(), 2);

    let image_path = dir.path().join("soup.gif");
    std::fs::write(&image_path, b"GIF89a\x01\x00\x01\x00").unwrap();
    let image = encode_data_uri(&image_path).unwrap();
    assert!(image.starts_with("data:image/gif;base64,"));

    let form = RecipeDraft::from(store.get(0).unwrap());
    assert_eq!(form.ingredients_raw, "Tomato; Basil");
    store
        .replace(0, RecipeDraft { image: Some(image.clone()), ..form })
        .unwrap();

    let titles: Vec<_> = store.all().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Pepper stew", "Tomato Soup"]);

    let reloaded = RecipeStore::load(&store.to_document().unwrap()).unwrap();
    assert_eq!(reloaded.get(1).unwrap().image.as_deref(), Some(image.as_str()));
    assert_eq!(reloaded.get(1).unwrap().ingredients, vec!["Tomato", "Basil"]);
}

#[test]
fn test_open_missing_document_is_io_error() {
    let dir = TempDir::new().unwrap();

    let result = RecipeStore::open(&CatalogConfig::default(), dir.path());

    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_open_malformed_document() {
    let dir = TempDir::new().unwrap();
    let config = write_catalog(&dir, "<recipes><recipe>");

    let result = RecipeStore::open(&config, dir.path());

    assert!(matches!(result, Err(Error::Document(_))));
}

#[test]
fn test_stale_position_surfaces_through_crate_error() {
    let mut store = RecipeStore::new();
    store.add(RecipeDraft::new("a", "", "", ""));

    let err: Error = store.remove(3).unwrap_err().into();

    assert!(matches!(
        err,
        Error::Store(StoreError::ReferenceNotFound(RecipeRef::Position(3)))
    ));
}
