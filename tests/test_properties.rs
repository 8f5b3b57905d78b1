use proptest::prelude::*;
use regex_extractor::{Extractor, PatternMatcher, Registry};
use std::collections::HashSet;

fn extractor() -> Extractor {
    Extractor::new(Registry::builtin().unwrap())
}

// Characters that show up in the built-in patterns, to make matches likely.
const PATTERN_ALPHABET: &str = "[a-zA-Z0-9 @.:/<>#$,()_+\\-\n\"]{0,120}";

// One standalone value per category, safe to repeat with a space between copies.
const TOKENS: [(&str, &str); 8] = [
    ("emails", "user@example.com"),
    ("urls", "https://example.com/a"),
    ("phones", "(555) 123-4567"),
    ("credit_cards", "1234-5678-9012-3456"),
    ("time", "2:30 PM"),
    ("html_tags", "<br/>"),
    ("hashtags", "#rust"),
    ("currency", "$1,299.99"),
];

fn repeated_token() -> impl Strategy<Value = (&'static str, &'static str, usize)> {
    (prop::sample::select(TOKENS.to_vec()), 2..6usize)
        .prop_map(|((category, token), copies)| (category, token, copies))
}

proptest! {
    #[test]
    fn extraction_is_deterministic(text in "\\PC{0,200}") {
        let extractor = extractor();
        prop_assert_eq!(extractor.extract_all(&text).unwrap(), extractor.extract_all(&text).unwrap());
    }

    #[test]
    fn every_category_is_present(text in "\\PC{0,200}") {
        let registry = Registry::builtin().unwrap();
        let result = Extractor::new(registry.clone()).extract_all(&text).unwrap();
        for category in registry.categories() {
            prop_assert!(result.get(category).is_some(), "missing category {}", category);
        }
    }

    #[test]
    fn matches_are_unique(text in PATTERN_ALPHABET) {
        let registry = Registry::builtin().unwrap();
        let result = Extractor::new(registry.clone()).extract_all(&text).unwrap();
        for rule in registry.iter() {
            let expected: HashSet<&str> = rule.find_all(&text).into_iter().collect();
            let distinct = result.get(rule.category()).unwrap();
            prop_assert_eq!(distinct.len(), expected.len());
            for m in distinct {
                prop_assert!(expected.contains(m.as_str()));
            }
        }
    }

    #[test]
    fn repeated_values_collapse((category, token, copies) in repeated_token()) {
        let text = vec![token; copies].join(" ");
        let registry = Registry::builtin().unwrap();
        let result = Extractor::new(registry.clone()).extract_all(&text).unwrap();

        prop_assert_eq!(registry.get(category).unwrap().find_all(&text).len(), copies);
        let matches = result.get(category).unwrap();
        prop_assert_eq!(matches.len(), 1);
        prop_assert!(matches.contains(token));
    }

    #[test]
    fn matches_satisfy_their_rule(text in PATTERN_ALPHABET) {
        let registry = Registry::builtin().unwrap();
        let result = Extractor::new(registry.clone()).extract_all(&text).unwrap();
        for (category, matches) in result.iter() {
            let rule = registry.get(category).unwrap();
            for m in matches {
                prop_assert!(text.contains(m.as_str()));
                prop_assert!(rule.matches(m), "{} does not fully match {}", m, category);
            }
        }
    }
}
