//! Recipe records and the form-shaped input used to build them.

/// Separator between ingredients in the raw form text.
pub const INGREDIENT_SEPARATOR: char = ';';

/// A single catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipe {
    pub title: String,
    pub about: String,
    /// Display order is significant and preserved through edits and serialization.
    pub ingredients: Vec<String>,
    /// Kept verbatim, including newlines.
    pub instructions: String,
    /// Inline data URI. `None` means the view falls back to [`Recipe::image_name`].
    pub image: Option<String>,
}

impl Recipe {
    /// Fallback image filename: the title with all whitespace removed plus `extension`.
    pub fn image_name(&self, extension: &str) -> String {
        let mut name: String = self.title.chars().filter(|c| !c.is_whitespace()).collect();
        name.push('.');
        name.push_str(extension.trim_start_matches('.'));
        name
    }

    /// Ingredients as they appear in the edit form, trimmed and joined with `"; "`.
    pub fn ingredients_form_text(&self) -> String {
        self.ingredients
            .iter()
            .map(|ingredient| ingredient.trim())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Raw form input for adding or replacing a recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub about: String,
    /// Semicolon-delimited ingredient list, e.g. `"Salt; Pepper"`.
    pub ingredients_raw: String,
    pub instructions: String,
    pub image: Option<String>,
}

impl RecipeDraft {
    pub fn new(
        title: impl Into<String>,
        about: impl Into<String>,
        ingredients_raw: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            about: about.into(),
            ingredients_raw: ingredients_raw.into(),
            instructions: instructions.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn into_recipe(self) -> Recipe {
        Recipe {
            ingredients: split_ingredients(&self.ingredients_raw),
            title: self.title,
            about: self.about,
            instructions: self.instructions,
            image: self.image.filter(|image| !image.is_empty()),
        }
    }
}

impl From<RecipeDraft> for Recipe {
    fn from(draft: RecipeDraft) -> Self {
        draft.into_recipe()
    }
}

/// Populates an edit form from a stored recipe. The image is carried over so
/// that an edit without a new attachment keeps the old one.
impl From<&Recipe> for RecipeDraft {
    fn from(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            about: recipe.about.clone(),
            ingredients_raw: recipe.ingredients_form_text(),
            instructions: recipe.instructions.clone(),
            image: recipe.image.clone(),
        }
    }
}

/// Splits on `;` and trims each token. Empty tokens are kept, so `""` yields `[""]`.
pub fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split(INGREDIENT_SEPARATOR)
        .map(|token| token.trim().to_string())
        .collect()
}
