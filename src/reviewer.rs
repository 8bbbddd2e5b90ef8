use crate::store::CategoryStore;

/// Outcome of reviewing one transaction: what the store suggested and what
/// was finally chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decision {
    pub previous_category: Option<String>,
    pub previous_match: Option<String>,
    pub chosen_category: Option<String>,
    pub chosen_match: Option<String>,
}

impl Decision {
    /// A decision that keeps the suggestion as is.
    #[cfg(test)]
    pub fn accepted(category: Option<&str>, keyword: Option<&str>) -> Self {
        Self {
            previous_category: category.map(str::to_string),
            previous_match: keyword.map(str::to_string),
            chosen_category: category.map(str::to_string),
            chosen_match: keyword.map(str::to_string),
        }
    }
}

fn remove_previous(store: &mut CategoryStore, category: &str, keyword: &str) {
    if !store.remove_keyword(category, keyword) {
        log::warn!("Category store inconsistency: {keyword:?} is not a keyword of {category:?}");
    }
}

/// Reconcile the store with a review decision.
///
/// A changed category moves the previous keyword out of the old category and
/// files the chosen match under the new one. An unchanged category with a
/// different match swaps the keyword in place.
pub fn apply_decision(store: &mut CategoryStore, decision: &Decision) {
    let Decision {
        previous_category,
        previous_match,
        chosen_category,
        chosen_match,
    } = decision;

    if chosen_category != previous_category {
        if let (Some(category), Some(keyword)) = (previous_category, previous_match) {
            remove_previous(store, category, keyword);
        }
        if let (Some(category), Some(keyword)) = (chosen_category, chosen_match) {
            store.add_keyword(category, keyword);
        }
    } else if let (Some(category), Some(keyword)) = (chosen_category, chosen_match) {
        if previous_match.as_ref() != Some(keyword) {
            if let Some(previous) = previous_match {
                remove_previous(store, category, previous);
            }
            store.add_keyword(category, keyword);
        }
    }
    log::debug!("Applied {decision:?}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(entries: &[(&str, &[&str])]) -> CategoryStore {
        let mut store = CategoryStore::new();
        for (category, keywords) in entries {
            for keyword in *keywords {
                store.add_keyword(category, keyword);
            }
        }
        store
    }

    fn decision(prev: (Option<&str>, Option<&str>), chosen: (Option<&str>, Option<&str>)) -> Decision {
        Decision {
            previous_category: prev.0.map(str::to_string),
            previous_match: prev.1.map(str::to_string),
            chosen_category: chosen.0.map(str::to_string),
            chosen_match: chosen.1.map(str::to_string),
        }
    }

    fn assert_no_empty_lists(s: &CategoryStore) {
        assert!(s.iter().all(|(_, keywords)| !keywords.is_empty()));
    }

    #[test]
    fn test_new_category_learned_from_empty_store() {
        let mut s = CategoryStore::new();
        apply_decision(&mut s, &decision((None, None), (Some("Coffee"), Some("Starbucks"))));
        assert_eq!(s, store(&[("Coffee", &["Starbucks"])]));
    }

    #[test]
    fn test_category_change_moves_keyword() {
        let mut s = store(&[("Coffee", &["Starbucks"])]);
        apply_decision(
            &mut s,
            &decision(
                (Some("Coffee"), Some("Starbucks")),
                (Some("Dining"), Some("Starbucks")),
            ),
        );
        assert_eq!(s, store(&[("Dining", &["Starbucks"])]));
    }

    #[test]
    fn test_category_change_keeps_other_keywords() {
        let mut s = store(&[("Coffee", &["Starbucks", "Peets"]), ("Dining", &["Chipotle"])]);
        apply_decision(
            &mut s,
            &decision(
                (Some("Coffee"), Some("Starbucks")),
                (Some("Dining"), Some("Starbucks")),
            ),
        );
        assert_eq!(
            s,
            store(&[("Coffee", &["Peets"]), ("Dining", &["Chipotle", "Starbucks"])])
        );
    }

    #[test]
    fn test_cleared_category_forgets_keyword() {
        let mut s = store(&[("Coffee", &["Starbucks"])]);
        apply_decision(&mut s, &decision((Some("Coffee"), Some("Starbucks")), (None, Some("Starbucks"))));
        assert!(s.is_empty());
    }

    #[test]
    fn test_new_category_without_match_is_not_stored() {
        let mut s = CategoryStore::new();
        apply_decision(&mut s, &decision((None, None), (Some("Coffee"), None)));
        assert!(s.is_empty());
    }

    #[test]
    fn test_same_category_new_match_replaces_keyword() {
        let mut s = store(&[("Coffee", &["Starbucks Seattle", "Peets"])]);
        apply_decision(
            &mut s,
            &decision(
                (Some("Coffee"), Some("Starbucks Seattle")),
                (Some("Coffee"), Some("Starbucks")),
            ),
        );
        assert_eq!(s, store(&[("Coffee", &["Peets", "Starbucks"])]));
    }

    #[test]
    fn test_same_category_empty_match_is_noop() {
        let original = store(&[("Coffee", &["Starbucks"])]);
        let mut s = original.clone();
        apply_decision(&mut s, &decision((Some("Coffee"), Some("Starbucks")), (Some("Coffee"), None)));
        assert_eq!(s, original);
    }

    #[test]
    fn test_unchanged_decision_is_idempotent() {
        let original = store(&[("Coffee", &["Starbucks"]), ("Rent", &["LANDLORD"])]);
        let mut s = original.clone();
        for _ in 0..3 {
            apply_decision(&mut s, &Decision::accepted(Some("Coffee"), Some("Starbucks")));
            apply_decision(&mut s, &Decision::accepted(None, None));
        }
        assert_eq!(s, original);
    }

    #[test]
    fn test_missing_previous_keyword_is_recoverable() {
        // the suggestion went stale: its keyword was already moved away
        let mut s = store(&[("Dining", &["Starbucks"])]);
        apply_decision(
            &mut s,
            &decision(
                (Some("Coffee"), Some("Starbucks")),
                (Some("Dining"), Some("Starbucks")),
            ),
        );
        assert_eq!(s, store(&[("Dining", &["Starbucks"])]));
        assert_no_empty_lists(&s);
    }

    #[test]
    fn test_lists_never_left_empty() {
        let mut s = store(&[("Coffee", &["Starbucks"]), ("Dining", &["Chipotle"])]);
        let steps = [
            decision((Some("Coffee"), Some("Starbucks")), (Some("Dining"), Some("Starbucks"))),
            decision((Some("Dining"), Some("Chipotle")), (Some("Dining"), Some("Chip"))),
            decision((Some("Dining"), Some("Chip")), (None, None)),
            decision((Some("Dining"), Some("Starbucks")), (Some("Coffee"), Some("Star"))),
        ];
        for step in &steps {
            apply_decision(&mut s, step);
            assert_no_empty_lists(&s);
        }
        assert_eq!(s, store(&[("Coffee", &["Star"])]));
    }
}
