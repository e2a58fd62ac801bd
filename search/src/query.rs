//! Search query types.

use nutype::nutype;

/// Trimmed query text.
#[nutype(
    sanitize(trim),
    derive(Debug, Clone, PartialEq, Eq, AsRef, Deref, From, Display)
)]
pub struct Keyword(String);

/// Query type for search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Matches title, about, or any ingredient.
    Keyword(Keyword),
    /// Matches ingredients only.
    Ingredient(Keyword),
}

impl SearchQuery {
    pub fn keyword(text: impl Into<String>) -> Self {
        SearchQuery::Keyword(Keyword::new(text.into()))
    }

    pub fn ingredient(text: impl Into<String>) -> Self {
        SearchQuery::Ingredient(Keyword::new(text.into()))
    }

    pub fn text(&self) -> &str {
        match self {
            SearchQuery::Keyword(keyword) | SearchQuery::Ingredient(keyword) => keyword.as_str(),
        }
    }
}
