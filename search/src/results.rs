//! Search results types.

use cookbook_core::store::StoredRecipe;
use cookbook_core::types::{Recipe, RecipeId};

/// A matching recipe with the position and id it had when the query ran.
pub type SearchHit<'a> = StoredRecipe<'a>;

/// Ordered matches borrowed from the store.
///
/// An empty result means the query ran and nothing matched.
#[derive(Debug, Clone, Default)]
pub struct SearchResults<'a> {
    pub(crate) hits: Vec<SearchHit<'a>>,
}

impl<'a> SearchResults<'a> {
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &SearchHit<'a>> + '_ {
        self.hits.iter()
    }

    /// Matched recipes in display order.
    pub fn recipes(&self) -> impl ExactSizeIterator<Item = &'a Recipe> + '_ {
        self.hits.iter().map(|hit| hit.recipe)
    }

    pub fn ids(&self) -> impl ExactSizeIterator<Item = RecipeId> + '_ {
        self.hits.iter().map(|hit| hit.id)
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

impl<'a> IntoIterator for SearchResults<'a> {
    type Item = SearchHit<'a>;
    type IntoIter = std::vec::IntoIter<SearchHit<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}
