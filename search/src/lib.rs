//! Recipe query engine.
//!
//! Evaluates keyword search and ingredient filters against a live
//! [`RecipeStore`](cookbook_core::RecipeStore).
//!
//! # Design
//!
//! - Stateless: every query rescans the store, so results always reflect the
//!   latest mutation. There is no index to keep in sync.
//! - Matching is substring containment after case folding. The keyword is
//!   lower-cased in full, while fields only have the 26 ASCII letters folded,
//!   so `É` in a field never matches `é` or `É` in a keyword.
//! - Results keep the store's display order. There is no ranking.
//!
//! # Empty keywords
//!
//! The empty string is a substring of every string, and keywords are trimmed.
//! A blank keyword search therefore returns the whole collection, and a blank
//! ingredient filter returns every recipe that has at least one ingredient.

mod config;
mod engine;
mod matcher;
mod query;
mod results;

pub use config::{CaseMatching, SearchConfig};
pub use engine::{SearchEngine, SearchError};
pub use query::{Keyword, SearchQuery};
pub use results::{SearchHit, SearchResults};
