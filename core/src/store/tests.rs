use super::*;

mod common {
    use super::*;

    pub(super) fn draft(title: &str) -> RecipeDraft {
        RecipeDraft::new(title, format!("about {title}"), "Salt; Pepper", format!("make {title}"))
    }

    pub(super) fn store_with(titles: &[&str]) -> RecipeStore {
        let mut store = RecipeStore::new();
        for title in titles {
            store.add(draft(title));
        }
        store
    }

    pub(super) fn titles(store: &RecipeStore) -> Vec<&str> {
        store.all().map(|recipe| recipe.title.as_str()).collect()
    }
}

mod load {
    use super::*;

    #[test]
    fn test_load_preserves_document_order() {
        let store = RecipeStore::load(
            "<recipes><recipe><title>B</title></recipe><recipe><title>A</title></recipe></recipes>",
        )
        .unwrap();

        assert_eq!(common::titles(&store), vec!["B", "A"]);
    }

    #[test]
    fn test_load_malformed_produces_no_store() {
        let result = RecipeStore::load("<recipes><recipe><title>B</title></recipe>");
        assert!(matches!(result, Err(DocumentError::Malformed(_))));
    }

    #[test]
    fn test_add_after_load_appends() {
        let mut store =
            RecipeStore::load("<recipes><recipe><title>Loaded</title></recipe></recipes>").unwrap();

        store.add(common::draft("New"));

        assert_eq!(common::titles(&store), vec!["Loaded", "New"]);
    }

    #[test]
    fn test_to_document_roundtrip() {
        let mut store = common::store_with(&["One", "Two"]);
        store.add(RecipeDraft::new("Three", "x", "", "y").with_image("data:image/png;base64,AA"));

        let reloaded = RecipeStore::load(&store.to_document().unwrap()).unwrap();

        assert_eq!(
            reloaded.all().cloned().collect::<Vec<_>>(),
            store.all().cloned().collect::<Vec<_>>()
        );
    }
}

mod add {
    use super::common::*;
    use super::*;

    #[test]
    fn test_add_preserves_insertion_order() {
        let store = store_with(&["a", "b", "c", "d"]);
        assert_eq!(titles(&store), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_add_splits_ingredients_keeping_empties() {
        let mut store = RecipeStore::new();
        store.add(RecipeDraft::new("Stew", "", "Salt; ;Pepper", ""));

        assert_eq!(store.get(0).unwrap().ingredients, vec!["Salt", "", "Pepper"]);
    }

    #[test]
    fn test_add_does_not_validate_title() {
        let mut store = RecipeStore::new();
        store.add(RecipeDraft::default());

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().title, "");
    }

    #[test]
    fn test_add_assigns_distinct_ids() {
        let mut store = RecipeStore::new();
        let first = store.add(draft("a"));
        let second = store.add(draft("b"));

        assert_ne!(first, second);
        assert_eq!(store.position_of(first), Some(0));
        assert_eq!(store.position_of(second), Some(1));
        assert_eq!(store.id_at(1), Some(second));
    }
}

mod replace {
    use super::common::*;
    use super::*;

    #[test]
    fn test_replace_moves_edited_recipe_to_end() {
        let mut store = store_with(&["a", "b", "c"]);

        store.replace(0, draft("a2")).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(titles(&store), vec!["b", "c", "a2"]);
    }

    #[test]
    fn test_replace_last_stays_last() {
        let mut store = store_with(&["a", "b"]);

        store.replace(1, draft("b2")).unwrap();

        assert_eq!(titles(&store), vec!["a", "b2"]);
    }

    #[test]
    fn test_replace_assigns_new_id() {
        let mut store = store_with(&["a", "b"]);
        let old = store.id_at(0).unwrap();

        let new = store.replace(0, draft("a2")).unwrap();

        assert_ne!(old, new);
        assert_eq!(store.position_of(old), None);
        assert_eq!(store.position_of(new), Some(1));
    }

    #[test]
    fn test_replace_out_of_range_leaves_store_untouched() {
        let mut store = store_with(&["a", "b"]);

        let result = store.replace(2, draft("x"));

        assert_eq!(
            result,
            Err(StoreError::ReferenceNotFound(RecipeRef::Position(2)))
        );
        assert_eq!(titles(&store), vec!["a", "b"]);
    }

    #[test]
    fn test_replace_by_id() {
        let mut store = store_with(&["a", "b", "c"]);
        let b = store.id_at(1).unwrap();

        store.replace_by_id(b, draft("b2")).unwrap();

        assert_eq!(titles(&store), vec!["a", "c", "b2"]);
        assert_eq!(
            store.replace_by_id(b, draft("again")),
            Err(StoreError::ReferenceNotFound(RecipeRef::Id(b)))
        );
    }
}

mod remove {
    use super::common::*;
    use super::*;

    #[test]
    fn test_remove_shrinks_by_one() {
        let mut store = store_with(&["a", "b", "c"]);

        let removed = store.remove(1).unwrap();

        assert_eq!(removed.title, "b");
        assert_eq!(store.len(), 2);
        assert!(store.all().all(|recipe| recipe.title != "b"));
    }

    #[test]
    fn test_remove_stale_index_out_of_range_fails() {
        let mut store = store_with(&["a", "b"]);

        store.remove(0).unwrap();
        let result = store.remove(1);

        assert_eq!(
            result,
            Err(StoreError::ReferenceNotFound(RecipeRef::Position(1)))
        );
        assert_eq!(titles(&store), vec!["b"]);
    }

    #[test]
    fn test_remove_stale_index_in_range_targets_current_element() {
        let mut store = store_with(&["a", "b", "c"]);

        store.remove(0).unwrap();
        let removed = store.remove(1).unwrap();

        assert_eq!(removed.title, "c");
        assert_eq!(titles(&store), vec!["b"]);
    }

    #[test]
    fn test_remove_from_empty_store() {
        let mut store = RecipeStore::new();
        assert_eq!(
            store.remove(0),
            Err(StoreError::ReferenceNotFound(RecipeRef::Position(0)))
        );
    }

    #[test]
    fn test_remove_by_id_survives_shifts() {
        let mut store = store_with(&["a", "b", "c"]);
        let c = store.id_at(2).unwrap();

        store.remove(0).unwrap();
        let removed = store.remove_by_id(c).unwrap();

        assert_eq!(removed.title, "c");
        assert_eq!(titles(&store), vec!["b"]);
        assert_eq!(
            store.remove_by_id(c),
            Err(StoreError::ReferenceNotFound(RecipeRef::Id(c)))
        );
    }
}

mod entries {
    use super::common::*;

    #[test]
    fn test_entries_report_positions_and_ids() {
        let store = store_with(&["a", "b"]);

        let entries: Vec<_> = store.entries().collect();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].position, 1);
        assert_eq!(entries[1].recipe.title, "b");
        assert_eq!(Some(entries[1].id), store.id_at(1));
        assert_eq!(store.get_by_id(entries[0].id).unwrap().title, "a");
    }
}
