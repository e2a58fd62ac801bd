//! Authoritative in-memory recipe collection.
//!
//! Iteration order is display order: document order for loaded recipes, with
//! new recipes appended. Recipes are addressed either by position (valid until
//! the next insert or removal) or by [`RecipeId`].
//!
//! Editing is remove-then-append: a replaced recipe moves to the end of the
//! collection and receives a new id.

use crate::document;
use crate::error::{DocumentError, Error, StoreError};
use crate::types::{CatalogConfig, Recipe, RecipeDraft, RecipeId, RecipeRef};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
struct Entry {
    id: RecipeId,
    recipe: Recipe,
}

/// A recipe together with its current position and id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoredRecipe<'a> {
    pub position: usize,
    pub id: RecipeId,
    pub recipe: &'a Recipe,
}

#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    entries: Vec<Entry>,
    next_id: u64,
}

impl RecipeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `source` into a new store. On failure no store is produced.
    pub fn load(source: &str) -> Result<Self, DocumentError> {
        let recipes = document::parse(source).inspect_err(|e| {
            warn!("Rejected recipe document: {e}");
        })?;

        let mut store = Self::new();
        for recipe in recipes {
            store.push(recipe);
        }
        info!("Loaded {} recipes", store.len());
        Ok(store)
    }

    /// Reads the configured source document relative to `base_dir` and loads it.
    pub fn open(config: &CatalogConfig, base_dir: &Path) -> Result<Self, Error> {
        let path = config.source_path(base_dir);
        debug!("Reading recipe document from {}", path.display());
        let source = std::fs::read_to_string(&path)?;
        Ok(Self::load(&source)?)
    }

    /// Serializes the current collection in display order.
    pub fn to_document(&self) -> Result<String, DocumentError> {
        document::write(self.all())
    }

    fn push(&mut self, recipe: Recipe) -> RecipeId {
        let id = RecipeId::new(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, recipe });
        id
    }

    fn check_position(&self, position: usize) -> Result<(), StoreError> {
        if position < self.entries.len() {
            Ok(())
        } else {
            warn!(
                "Stale reference: position {position} in a collection of {}",
                self.entries.len()
            );
            Err(StoreError::ReferenceNotFound(RecipeRef::Position(position)))
        }
    }

    fn require_id(&self, id: RecipeId) -> Result<usize, StoreError> {
        self.position_of(id).ok_or_else(|| {
            warn!("Stale reference: recipe {id} is no longer stored");
            StoreError::ReferenceNotFound(RecipeRef::Id(id))
        })
    }
}

/// Read operations.
impl RecipeStore {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recipes in display order.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &Recipe> + '_ {
        self.entries.iter().map(|entry| &entry.recipe)
    }

    /// Recipes with their positions and ids, in display order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = StoredRecipe<'_>> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(position, entry)| StoredRecipe {
                position,
                id: entry.id,
                recipe: &entry.recipe,
            })
    }

    pub fn get(&self, position: usize) -> Option<&Recipe> {
        self.entries.get(position).map(|entry| &entry.recipe)
    }

    pub fn get_by_id(&self, id: RecipeId) -> Option<&Recipe> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.recipe)
    }

    pub fn id_at(&self, position: usize) -> Option<RecipeId> {
        self.entries.get(position).map(|entry| entry.id)
    }

    pub fn position_of(&self, id: RecipeId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }
}

/// Mutation operations.
impl RecipeStore {
    /// Appends a recipe built from `draft`.
    pub fn add(&mut self, draft: RecipeDraft) -> RecipeId {
        let id = self.push(draft.into_recipe());
        debug!("Added recipe {id} at position {}", self.entries.len() - 1);
        id
    }

    /// Removes the recipe at `position` and appends one built from `draft`.
    ///
    /// The store is unchanged if `position` is out of range.
    pub fn replace(
        &mut self,
        position: usize,
        draft: RecipeDraft,
    ) -> Result<RecipeId, StoreError> {
        self.check_position(position)?;
        let old = self.entries.remove(position);
        let id = self.push(draft.into_recipe());
        debug!("Replaced recipe {} at position {position} with {id}", old.id);
        Ok(id)
    }

    /// Removes and returns the recipe at `position`.
    pub fn remove(&mut self, position: usize) -> Result<Recipe, StoreError> {
        self.check_position(position)?;
        let entry = self.entries.remove(position);
        debug!("Removed recipe {} from position {position}", entry.id);
        Ok(entry.recipe)
    }

    pub fn replace_by_id(
        &mut self,
        id: RecipeId,
        draft: RecipeDraft,
    ) -> Result<RecipeId, StoreError> {
        let position = self.require_id(id)?;
        self.replace(position, draft)
    }

    pub fn remove_by_id(&mut self, id: RecipeId) -> Result<Recipe, StoreError> {
        let position = self.require_id(id)?;
        self.remove(position)
    }
}

#[cfg(test)]
mod tests;
