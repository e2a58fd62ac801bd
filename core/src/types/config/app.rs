use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Catalog configuration, persisted as cookbook.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub catalog: CatalogSection,
    #[serde(default)]
    pub images: ImagesConfig,
    #[serde(default)]
    pub filters: FiltersConfig,
}

impl CatalogConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join("cookbook.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.catalog.source.as_os_str().is_empty() {
            errors.push("catalog.source must not be empty".to_string());
        }

        let extension = self.images.extension.trim_start_matches('.');
        if extension.is_empty() {
            errors.push("images.extension must not be empty".to_string());
        } else if extension.chars().any(char::is_whitespace) {
            errors.push("images.extension must not contain whitespace".to_string());
        }

        for (index, label) in self.filters.predefined.iter().enumerate() {
            if label.trim().is_empty() {
                errors.push(format!("filters.predefined[{index}] must not be blank"));
            }
        }

        errors
    }

    /// Resolves relative paths against `base`.
    pub fn source_path(&self, base: &Path) -> PathBuf {
        base.join(&self.catalog.source)
    }
}

/// Where the recipe document is read from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogSection {
    #[serde(default = "default_source")]
    pub source: PathBuf,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            source: default_source(),
        }
    }
}

fn default_source() -> PathBuf {
    PathBuf::from("data/recipes.xml")
}

/// Fallback image lookup for recipes without an inline image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImagesConfig {
    #[serde(default = "default_image_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_image_extension")]
    pub extension: String,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            directory: default_image_directory(),
            extension: default_image_extension(),
        }
    }
}

fn default_image_directory() -> PathBuf {
    PathBuf::from("images")
}

fn default_image_extension() -> String {
    "jpg".to_string()
}

/// Labels of the predefined ingredient filters offered by the view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FiltersConfig {
    #[serde(default = "default_predefined_filters")]
    pub predefined: Vec<String>,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            predefined: default_predefined_filters(),
        }
    }
}

fn default_predefined_filters() -> Vec<String> {
    ["Chicken", "Beef", "Fish", "Cheese", "Tomato"]
        .into_iter()
        .map(String::from)
        .collect()
}
