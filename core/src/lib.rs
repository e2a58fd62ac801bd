//! In-memory recipe catalog.
//!
//! A [`RecipeStore`] owns the ordered collection of recipes parsed from a
//! structured document and is the only mutation surface. Queries live in the
//! `cookbook_search` crate and read the store directly.

pub mod attachment;
pub mod document;
pub mod error;
pub mod store;
pub mod types;

pub use error::{Error, Result};
pub use store::RecipeStore;
