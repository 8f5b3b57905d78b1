use crate::error::{Error, Result};
use crate::registry::Registry;
use rayon::prelude::*;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeSet;
use tracing::debug;

/// Deduplicated matches per category for one extraction run.
///
/// Every category of the registry is present, in registry order, even when
/// its set is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    entries: Vec<(String, BTreeSet<String>)>,
}

impl MatchSet {
    pub fn get(&self, category: &str) -> Option<&BTreeSet<String>> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, matches)| matches)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries
            .iter()
            .map(|(name, matches)| (name.as_str(), matches))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of distinct matches across all categories.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, matches)| matches.len()).sum()
    }

    /// True when no category matched anything.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, matches)| matches.is_empty())
    }
}

impl Serialize for MatchSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, matches) in &self.entries {
            map.serialize_entry(name, matches)?;
        }
        map.end()
    }
}

/// Applies every rule of a registry to input text.
#[derive(Debug, Clone)]
pub struct Extractor {
    registry: Registry,
    max_input_len: Option<usize>,
}

impl Extractor {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            max_input_len: None,
        }
    }

    /// Reject inputs longer than `max` bytes instead of scanning them.
    pub fn with_max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = Some(max);
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn extract_all(&self, text: &str) -> Result<MatchSet> {
        if let Some(max) = self.max_input_len {
            if text.len() > max {
                return Err(Error::SizeLimitExceeded {
                    len: text.len(),
                    max,
                });
            }
        }

        let entries = self
            .registry
            .iter()
            .map(|rule| {
                let matches: BTreeSet<String> =
                    rule.find_all(text).into_iter().map(str::to_string).collect();
                debug!(category = rule.category(), count = matches.len(), "extracted");
                (rule.category().to_string(), matches)
            })
            .collect();

        Ok(MatchSet { entries })
    }

    /// Extract from independent inputs in parallel; results keep input order.
    pub fn extract_many(&self, texts: &[&str]) -> Vec<Result<MatchSet>> {
        texts.par_iter().map(|text| self.extract_all(text)).collect()
    }
}
