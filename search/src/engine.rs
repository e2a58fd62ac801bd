use crate::config::SearchConfig;
use crate::matcher::Matcher;
use crate::query::SearchQuery;
use crate::results::SearchResults;
use cookbook_core::RecipeStore;
use thiserror::Error;
use tracing::trace;

/// Search error type.
///
/// Evaluation is currently infallible, but the explicit error type keeps
/// "could not evaluate" distinct from an empty result for callers.
#[derive(Debug, Error)]
pub enum SearchError {}

#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

/// Search operations.
impl SearchEngine {
    /// Evaluates `query` against the current contents of `store`.
    pub fn search<'a>(
        &self,
        store: &'a RecipeStore,
        query: &SearchQuery,
    ) -> Result<SearchResults<'a>, SearchError> {
        let matcher = Matcher::new(query.text(), self.config.case_matching);
        let limit = self.config.result_limit.unwrap_or(usize::MAX);

        let hits: Vec<_> = store
            .entries()
            .filter(|entry| match query {
                SearchQuery::Keyword(_) => matcher.matches_any_field(entry.recipe),
                SearchQuery::Ingredient(_) => matcher.matches_ingredient(entry.recipe),
            })
            .take(limit)
            .collect();

        trace!(
            "Query {:?} matched {} of {} recipes",
            query,
            hits.len(),
            store.len()
        );
        Ok(SearchResults { hits })
    }

    /// Matches title, about, or any ingredient.
    pub fn search_keyword<'a>(
        &self,
        store: &'a RecipeStore,
        keyword: &str,
    ) -> Result<SearchResults<'a>, SearchError> {
        self.search(store, &SearchQuery::keyword(keyword))
    }

    /// Matches ingredients only.
    pub fn filter_by_ingredient<'a>(
        &self,
        store: &'a RecipeStore,
        ingredient: &str,
    ) -> Result<SearchResults<'a>, SearchError> {
        self.search(store, &SearchQuery::ingredient(ingredient))
    }
}
