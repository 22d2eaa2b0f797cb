use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{Category, Item, ItemId, UserId};

/// Personalization policy selected for a recommendation request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Uniform random sample of unseen items
    #[default]
    Baseline,
    /// Unseen items from the user's most frequent genre
    Affinity,
}

impl Variant {
    /// Resolves a raw request parameter to a variant.
    ///
    /// Matching is case-insensitive. Anything unrecognized, or no value at all,
    /// resolves to [`Variant::Baseline`].
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Variant::Baseline;
        };

        match raw.trim().to_ascii_lowercase().as_str() {
            "baseline" => Variant::Baseline,
            "affinity" => Variant::Affinity,
            other => {
                tracing::warn!(variant = %other, "Unknown variant requested, using baseline");
                Variant::Baseline
            }
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Baseline => write!(f, "baseline"),
            Variant::Affinity => write!(f, "affinity"),
        }
    }
}

/// A recommended item with the rationale for showing it
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendedItem {
    pub item_id: ItemId,
    pub title: String,
    pub category: Category,
    pub genre: String,
    pub price: f64,
    pub explanation: String,
    /// Variant that actually produced this item
    pub variant: Variant,
}

impl RecommendedItem {
    pub fn new(item: &Item, explanation: String, variant: Variant) -> Self {
        Self {
            item_id: item.id,
            title: item.title.clone(),
            category: item.category,
            genre: item.genre.clone(),
            price: item.price,
            explanation,
            variant,
        }
    }
}

/// Response body for a recommendation request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationResult {
    pub user_id: UserId,
    /// Variant the request resolved to
    pub variant: Variant,
    /// Variant that produced the items; differs from `variant` when affinity fell back
    pub applied_variant: Variant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_genre: Option<String>,
    pub count: usize,
    pub recommendations: Vec<RecommendedItem>,
}

impl RecommendationResult {
    /// Empty result for a user with nothing left to recommend
    pub fn empty(user_id: UserId, variant: Variant) -> Self {
        Self {
            user_id,
            variant,
            applied_variant: Variant::Baseline,
            favorite_genre: None,
            count: 0,
            recommendations: Vec::new(),
        }
    }
}
