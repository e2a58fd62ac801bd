use crate::types::RecipeRef;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    #[error("image error: {0}")]
    Image(#[from] ImageError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("reference not found: {0}")]
    ReferenceNotFound(RecipeRef),
}

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("malformed document: {0}")]
    Malformed(String),

    #[error("failed to write document: {0}")]
    Write(String),
}

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("failed to read image {path}: {source}")]
    ReadFailure {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
