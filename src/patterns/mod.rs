pub mod credit_cards;
pub mod currency;
pub mod emails;
pub mod hashtags;
pub mod html_tags;
pub mod phones;
pub mod time;
pub mod urls;

use crate::error::{Error, Result};
use regex::Regex;
use regex_syntax::hir::{Hir, Look};

/// Built-in categories and their expressions, in registry order.
pub const BUILTIN: [(&str, &str); 8] = [
    (emails::CATEGORY, emails::PATTERN),
    (urls::CATEGORY, urls::PATTERN),
    (phones::CATEGORY, phones::PATTERN),
    (credit_cards::CATEGORY, credit_cards::PATTERN),
    (time::CATEGORY, time::PATTERN),
    (html_tags::CATEGORY, html_tags::PATTERN),
    (hashtags::CATEGORY, hashtags::PATTERN),
    (currency::CATEGORY, currency::PATTERN),
];

pub trait PatternMatcher {
    /// True when `value` as a whole satisfies the pattern.
    fn matches(&self, value: &str) -> bool;
}

/// A compiled expression bound to one category.
///
/// Two regexes are kept: the search form used for extraction and an anchored
/// form used to check that a value satisfies the rule entirely.
#[derive(Debug, Clone)]
pub struct Rule {
    category: String,
    search: Regex,
    anchored: Regex,
}

impl Rule {
    pub fn new(category: impl Into<String>, pattern: &str) -> Result<Self> {
        let category = category.into();
        let invalid = |source: regex::Error| Error::Configuration {
            category: category.clone(),
            source,
        };

        let search = Regex::new(pattern).map_err(invalid)?;

        // Anchors wrap the parsed expression, not the source text.
        let hir = regex_syntax::parse(pattern)
            .map_err(|err| invalid(regex::Error::Syntax(err.to_string())))?;
        let anchored = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);
        let anchored = Regex::new(&anchored.to_string()).map_err(invalid)?;

        Ok(Self {
            category,
            search,
            anchored,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn pattern(&self) -> &str {
        self.search.as_str()
    }

    /// Every non-overlapping match, left to right.
    ///
    /// Always yields the whole matched span. Capture groups inside the
    /// expression only constrain the match and are never returned on their own.
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.search.find_iter(text).map(|m| m.as_str()).collect()
    }
}

impl PatternMatcher for Rule {
    fn matches(&self, value: &str) -> bool {
        self.anchored.is_match(value)
    }
}
