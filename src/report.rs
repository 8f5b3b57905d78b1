use crate::extractor::MatchSet;
use crate::patterns::{credit_cards, currency, emails, phones};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::{json, Value};

lazy_static! {
    // Same digit class the card rule matches with, Unicode `Nd` included
    static ref DIGIT: Regex = Regex::new(r"\d").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Risk {
    #[serde(rename = "high-risk")]
    High,
    #[serde(rename = "medium-risk")]
    Medium,
    #[serde(rename = "low-risk")]
    Low,
}

impl Risk {
    pub fn for_category(category: &str) -> Self {
        match category {
            credit_cards::CATEGORY => Risk::High,
            emails::CATEGORY | phones::CATEGORY | currency::CATEGORY => Risk::Medium,
            _ => Risk::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Print a total count before the categories.
    pub summary: bool,
    /// Hide all but the last four digits of card numbers.
    pub mask: bool,
}

/// Replace every digit except the last four with `*`, keeping separators.
pub fn mask_digits(value: &str) -> String {
    let positions: Vec<usize> = DIGIT.find_iter(value).map(|m| m.start()).collect();
    let hidden = &positions[..positions.len().saturating_sub(4)];

    value
        .char_indices()
        .map(|(i, c)| if hidden.binary_search(&i).is_ok() { '*' } else { c })
        .collect()
}

fn display_items(
    category: &str,
    matches: impl Iterator<Item = String>,
    opts: &ReportOptions,
) -> Vec<String> {
    if opts.mask && category == credit_cards::CATEGORY {
        matches.map(|m| mask_digits(&m)).collect()
    } else {
        matches.collect()
    }
}

/// Plain text report: each category name uppercased, one match per line.
pub fn render_text(result: &MatchSet, opts: &ReportOptions) -> String {
    let mut out = String::new();

    if opts.summary {
        out.push_str(&format!("Total matches: {}\n", result.total()));
    }

    if result.is_empty() {
        out.push_str("No matches found\n");
        return out;
    }

    for (category, matches) in result.iter() {
        out.push_str(&format!("\n{}:\n", category.to_uppercase()));
        for item in display_items(category, matches.iter().cloned(), opts) {
            out.push_str(&format!("  {}\n", item));
        }
    }

    out
}

pub fn render_json(result: &MatchSet, opts: &ReportOptions) -> Value {
    let categories: Vec<Value> = result
        .iter()
        .map(|(category, matches)| {
            json!({
                "category": category,
                "risk": Risk::for_category(category),
                "count": matches.len(),
                "matches": display_items(category, matches.iter().cloned(), opts),
            })
        })
        .collect();

    json!({
        "total": result.total(),
        "categories": categories,
    })
}
