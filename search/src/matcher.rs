use crate::config::CaseMatching;
use cookbook_core::types::Recipe;
use std::borrow::Cow;

/// Case-folded needle ready to test against recipe fields.
pub(crate) struct Matcher<'q> {
    needle: Cow<'q, str>,
    case_matching: CaseMatching,
}

impl<'q> Matcher<'q> {
    pub(crate) fn new(needle: &'q str, case_matching: CaseMatching) -> Self {
        Self {
            needle: fold_needle(needle, case_matching),
            case_matching,
        }
    }

    pub(crate) fn matches(&self, haystack: &str) -> bool {
        fold(haystack, self.case_matching).contains(self.needle.as_ref())
    }

    pub(crate) fn matches_any_field(&self, recipe: &Recipe) -> bool {
        self.matches(&recipe.title) || self.matches(&recipe.about) || self.matches_ingredient(recipe)
    }

    pub(crate) fn matches_ingredient(&self, recipe: &Recipe) -> bool {
        recipe
            .ingredients
            .iter()
            .any(|ingredient| self.matches(ingredient))
    }
}

/// Keywords are lower-cased in full; fields only have `A-Z` folded.
fn fold_needle(needle: &str, case_matching: CaseMatching) -> Cow<'_, str> {
    match case_matching {
        CaseMatching::AsciiInsensitive => Cow::Owned(needle.to_lowercase()),
        CaseMatching::Sensitive => Cow::Borrowed(needle),
    }
}

fn fold(text: &str, case_matching: CaseMatching) -> Cow<'_, str> {
    match case_matching {
        CaseMatching::AsciiInsensitive if text.bytes().any(|b| b.is_ascii_uppercase()) => {
            Cow::Owned(text.to_ascii_lowercase())
        }
        _ => Cow::Borrowed(text),
    }
}
