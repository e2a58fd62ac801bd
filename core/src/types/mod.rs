pub(crate) mod config;
pub use config::{CatalogConfig, CatalogSection, FiltersConfig, ImagesConfig};

pub(crate) mod id;
pub use id::{RecipeId, RecipeRef};

pub(crate) mod recipe;
pub use recipe::{Recipe, RecipeDraft, split_ingredients};
