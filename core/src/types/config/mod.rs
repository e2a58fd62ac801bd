mod app;

pub use app::{CatalogConfig, CatalogSection, FiltersConfig, ImagesConfig};
