use std::fmt;

/// Durable identifier assigned by a [`RecipeStore`](crate::RecipeStore) on insertion.
///
/// Ids are never reused within a store. Replacing a recipe assigns a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecipeId(u64);

impl RecipeId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Reference to a stored recipe, either by current position or by id.
///
/// Positions are only valid until the next insert or removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeRef {
    Position(usize),
    Id(RecipeId),
}

impl fmt::Display for RecipeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeRef::Position(position) => write!(f, "position {position}"),
            RecipeRef::Id(id) => write!(f, "recipe {id}"),
        }
    }
}
