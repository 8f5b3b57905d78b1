pub mod cli;
pub mod error;
pub mod extractor;
pub mod patterns;
pub mod registry;
pub mod report;

pub use error::{Error, Result};
pub use extractor::{Extractor, MatchSet};
pub use patterns::{PatternMatcher, Rule};
pub use registry::{Registry, RuleSpec};

use lazy_static::lazy_static;

lazy_static! {
    static ref BUILTIN_EXTRACTOR: Extractor =
        Extractor::new(Registry::builtin().expect("built-in patterns compile"));
}

/// Extract every built-in category from `text`.
pub fn extract_all(text: &str) -> MatchSet {
    BUILTIN_EXTRACTOR
        .extract_all(text)
        .expect("built-in extractor has no size limit")
}

/// Built-in categories that `value` matches as a whole.
pub fn classify(value: &str) -> Vec<String> {
    BUILTIN_EXTRACTOR
        .registry()
        .classify(value)
        .into_iter()
        .map(str::to_string)
        .collect()
}
