use crate::error::{Error, Result};
use crate::patterns::{PatternMatcher, Rule, BUILTIN};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// One entry of a JSON rule file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub category: String,
    pub pattern: String,
}

/// Ordered, immutable table of category rules.
///
/// Registration order is the order in which the extractor applies rules and
/// in which reports list categories. Category names are unique.
#[derive(Debug, Clone)]
pub struct Registry {
    rules: Vec<Rule>,
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    rules: Vec<Rule>,
    seen: HashSet<String>,
}

impl RegistryBuilder {
    pub fn rule(mut self, category: &str, pattern: &str) -> Result<Self> {
        if !self.seen.insert(category.to_string()) {
            return Err(Error::DuplicateCategory(category.to_string()));
        }

        let rule = Rule::new(category, pattern)?;
        debug!(category, pattern, "registered rule");
        self.rules.push(rule);
        Ok(self)
    }

    pub fn build(self) -> Registry {
        Registry { rules: self.rules }
    }
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The eight built-in categories.
    pub fn builtin() -> Result<Self> {
        BUILTIN
            .iter()
            .try_fold(Self::builder(), |builder, (category, pattern)| {
                builder.rule(category, pattern)
            })
            .map(RegistryBuilder::build)
    }

    pub fn from_specs(specs: &[RuleSpec]) -> Result<Self> {
        specs
            .iter()
            .try_fold(Self::builder(), |builder, spec| {
                builder.rule(&spec.category, &spec.pattern)
            })
            .map(RegistryBuilder::build)
    }

    /// Build from a JSON array of `{"category": ..., "pattern": ...}` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let specs: Vec<RuleSpec> = serde_json::from_str(json)?;
        Self::from_specs(&specs)
    }

    /// Keep the `include`d categories (all of them when empty), minus `exclude`.
    pub fn select(self, include: &[String], exclude: &[String]) -> Self {
        for name in include.iter().chain(exclude) {
            if self.get(name).is_none() {
                warn!(category = %name, "ignoring unknown category");
            }
        }

        let rules = self
            .rules
            .into_iter()
            .filter(|rule| include.is_empty() || include.iter().any(|c| c == rule.category()))
            .filter(|rule| !exclude.iter().any(|c| c == rule.category()))
            .collect();

        Self { rules }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn get(&self, category: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.category() == category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(Rule::category)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Categories whose rule matches `value` in its entirety.
    pub fn classify(&self, value: &str) -> Vec<&str> {
        if value.is_empty() {
            return vec![];
        }

        self.rules
            .iter()
            .filter(|rule| rule.matches(value))
            .map(Rule::category)
            .collect()
    }
}
