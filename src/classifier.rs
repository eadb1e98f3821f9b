//! Rule-based product suggestions from detected image labels.
//!
//! Matching is a case-insensitive substring test against ordered tables;
//! the first matching row wins, so row order is the tie-break.

use serde::{Deserialize, Serialize};

use crate::models::Label;

pub const DEFAULT_ITEM: &str = "Product";
pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_PRICE: PriceRange = PriceRange { min: 20, max: 100 };

// Classifier input is capped at this many items
pub const MAX_ITEMS: usize = 5;
const MAX_TAGS: usize = 4;

const CATEGORIES: &[(&str, &[&str])] = &[
    ("Clothing", &["shirt", "dress", "pants", "jacket", "shoes"]),
    ("Electronics", &["phone", "computer", "camera", "headphones"]),
    ("Home & Garden", &["furniture", "plant", "decoration", "kitchen"]),
    ("Sports", &["ball", "equipment", "fitness", "outdoor"]),
    ("Beauty", &["cosmetics", "skincare", "perfume", "makeup"]),
];

const PRICE_RANGES: &[(&str, PriceRange)] = &[
    ("clothing", PriceRange { min: 25, max: 150 }),
    ("electronics", PriceRange { min: 50, max: 500 }),
    ("furniture", PriceRange { min: 100, max: 800 }),
    ("beauty", PriceRange { min: 15, max: 80 }),
    ("sports", PriceRange { min: 30, max: 200 }),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRecord {
    pub name: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub price_range: PriceRange,
}

/// Builds a suggestion from ranked item names. Never fails: an empty
/// slice or a blank first item yields the "Product" defaults.
pub fn classify<S: AsRef<str>>(items: &[S]) -> SuggestionRecord {
    let primary = items
        .first()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_ITEM);

    let features: Vec<&str> = items.iter().skip(1).take(2).map(|s| s.as_ref()).collect();
    let mut description = format!(
        "High-quality {} perfect for everyday use.",
        primary.to_lowercase()
    );
    if !features.is_empty() {
        description.push_str(&format!(" {} features included.", features.join(", ")));
    }

    SuggestionRecord {
        name: format!("Premium {}", primary),
        description,
        category: categorize(primary).to_string(),
        tags: items.iter().take(MAX_TAGS).map(|s| s.as_ref().to_string()).collect(),
        price_range: estimate_price(primary),
    }
}

pub fn categorize(item: &str) -> &'static str {
    let item = item.to_lowercase();
    CATEGORIES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| item.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

pub fn estimate_price(item: &str) -> PriceRange {
    let item = item.to_lowercase();
    PRICE_RANGES
        .iter()
        .find(|(key, _)| item.contains(key))
        .map(|(_, range)| *range)
        .unwrap_or(DEFAULT_PRICE)
}

// Flattens vision output into classifier input: blanks dropped, capped
pub fn detected_items(labels: &[Label]) -> Vec<String> {
    labels
        .iter()
        .map(|l| l.description.trim())
        .filter(|d| !d.is_empty())
        .take(MAX_ITEMS)
        .map(str::to_string)
        .collect()
}
