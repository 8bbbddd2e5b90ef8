use crate::store::CategoryStore;

fn matches(payee: &str, keyword: &str) -> bool {
    payee.to_lowercase().contains(&keyword.to_lowercase())
}

/// Find the category whose keyword occurs in `payee`, ignoring case.
///
/// Categories and, within each category, keywords are tried in lexicographic
/// order; the first hit wins. Returns the category together with the keyword
/// that triggered it, or `(None, None)` when nothing matches.
pub fn resolve<'s>(store: &'s CategoryStore, payee: &str) -> (Option<&'s str>, Option<&'s str>) {
    for (category, keywords) in store.iter() {
        let mut sorted: Vec<&String> = keywords.iter().collect();
        sorted.sort();
        if let Some(keyword) = sorted.into_iter().find(|k| matches(payee, k)) {
            log::debug!("{payee:?} resolved to {category:?} via {keyword:?}");
            return (Some(category), Some(keyword.as_str()));
        }
    }
    log::debug!("{payee:?} has no known category");
    (None, None)
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

    #[test]
    fn test_known_payee_resolves() {
        let s = store(&[("Coffee", &["Starbucks"])]);
        assert_eq!(
            resolve(&s, "Starbucks Downtown"),
            (Some("Coffee"), Some("Starbucks"))
        );
    }

    #[test]
    fn test_match_ignores_case() {
        let s = store(&[("Coffee", &["starbucks"])]);
        assert_eq!(
            resolve(&s, "STARBUCKS #1234 SEATTLE"),
            (Some("Coffee"), Some("starbucks"))
        );
    }

    #[test]
    fn test_unknown_payee_resolves_to_nothing() {
        let s = store(&[("Coffee", &["Starbucks"]), ("Rent", &["LANDLORD"])]);
        assert_eq!(resolve(&s, "Whole Foods"), (None, None));
        assert_eq!(resolve(&CategoryStore::new(), "Whole Foods"), (None, None));
    }

    #[test]
    fn test_ambiguous_match_takes_first_category_alphabetically() {
        let s = store(&[("Groceries", &["Market"]), ("Dining", &["Market Cafe"])]);
        assert_eq!(
            resolve(&s, "Market Cafe Downtown"),
            (Some("Dining"), Some("Market Cafe"))
        );
    }

    #[test]
    fn test_ambiguous_keywords_take_first_alphabetically() {
        let s = store(&[("Coffee", &["Starbucks", "Star"])]);
        assert_eq!(
            resolve(&s, "Starbucks Seattle"),
            (Some("Coffee"), Some("Star"))
        );
    }

    #[test]
    fn test_result_is_sound_and_complete() {
        let s = store(&[
            ("Coffee", &["Starbucks", "Peets"]),
            ("Groceries", &["Safeway", "whole foods"]),
            ("Transport", &["Uber", "Lyft"]),
        ]);
        let payees = [
            "PEETS COFFEE 0042",
            "Whole Foods Market",
            "Uber Trip",
            "Amazon",
            "Lyft ride",
            "Shell Oil",
        ];
        for payee in payees {
            match resolve(&s, payee) {
                (Some(category), Some(keyword)) => {
                    assert!(payee.to_lowercase().contains(&keyword.to_lowercase()));
                    assert!(s.keywords(category).unwrap().iter().any(|k| k == keyword));
                }
                (None, None) => {
                    for (_, keywords) in s.iter() {
                        assert!(keywords.iter().all(|k| !matches(payee, k)));
                    }
                }
                other => panic!("half-resolved result for {payee:?}: {other:?}"),
            }
        }
    }
}
