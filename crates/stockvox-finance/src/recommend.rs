// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rule-based business recommendations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::valuation::{CategoryBreakdown, InventoryValuation};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Warning,
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub action: String,
}

impl Recommendation {
    fn new(
        kind: RecommendationKind,
        title: &str,
        description: impl Into<String>,
        action: &str,
    ) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.into(),
            action: action.to_string(),
        }
    }
}

/// Thresholds the rules compare against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationRules {
    pub low_margin_threshold_pct: f64,
    pub high_stock_multiplier: u32,
}

/// Evaluate the rules in fixed order: low margin, top category, high stock.
pub fn recommend(
    valuation: &InventoryValuation,
    categories: &[CategoryBreakdown],
    rules: RecommendationRules,
) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if valuation
        .margin_pct()
        .is_some_and(|m| m < rules.low_margin_threshold_pct)
    {
        out.push(Recommendation::new(
            RecommendationKind::Warning,
            "Low Profit Margins",
            format!(
                "Overall profit margin is below {}%. Consider reviewing pricing strategy.",
                rules.low_margin_threshold_pct
            ),
            "Review pricing for low-margin items",
        ));
    }

    if let Some(top) = top_category(categories) {
        out.push(Recommendation::new(
            RecommendationKind::Success,
            "Top Performing Category",
            format!("{} represents your highest value category", top.name),
            "Consider expanding this category",
        ));
    }

    let stock_ceiling = valuation.item_count as u64 * u64::from(rules.high_stock_multiplier);
    if valuation.total_quantity > stock_ceiling {
        out.push(Recommendation::new(
            RecommendationKind::Info,
            "High Inventory Levels",
            "Inventory quantity is high relative to item diversity",
            "Consider inventory optimization strategies",
        ));
    }

    out
}

/// Highest retail value; ties go to the category seen first.
fn top_category(categories: &[CategoryBreakdown]) -> Option<&CategoryBreakdown> {
    categories.iter().fold(None, |best, c| match best {
        Some(b) if b.retail_value >= c.retail_value => Some(b),
        _ => Some(c),
    })
}
