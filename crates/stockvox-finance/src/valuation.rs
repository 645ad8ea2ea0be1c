// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inventory valuation and per-category cost analysis.

use serde::{Deserialize, Serialize};
use stockvox_core::InventoryItem;

use crate::money::round_cents;
use crate::recommend::Recommendation;

/// Aggregate cost and retail value of an inventory snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryValuation {
    pub total_cost_value: f64,
    pub total_retail_value: f64,
    pub total_profit_potential: f64,
    pub item_count: usize,
    pub total_quantity: u64,
}

impl InventoryValuation {
    /// Overall margin in percent, unrounded. `None` when there is no retail value.
    pub fn margin_pct(&self) -> Option<f64> {
        (self.total_retail_value > 0.0)
            .then(|| self.total_profit_potential / self.total_retail_value * 100.0)
    }
}

/// Valuation plus the rounded overall margin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallSummary {
    #[serde(flatten)]
    pub valuation: InventoryValuation,
    pub avg_profit_margin: f64,
}

/// Totals for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub name: String,
    pub item_count: usize,
    pub total_quantity: u64,
    pub cost_value: f64,
    pub retail_value: f64,
    pub profit_margin: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostAnalysisReport {
    pub overall: OverallSummary,
    /// In the order each category was first seen.
    pub categories: Vec<CategoryBreakdown>,
    pub recommendations: Vec<Recommendation>,
}

/// Per-unit cost of an item. A missing or zero cost price falls back to
/// `price * cost_ratio`.
pub fn effective_unit_cost(item: &InventoryItem, cost_ratio: f64) -> f64 {
    match item.cost_price {
        Some(cost) if cost != 0.0 => cost,
        _ => item.price * cost_ratio,
    }
}

/// Single-pass valuation of `items`.
pub fn valuate(items: &[InventoryItem], cost_ratio: f64) -> InventoryValuation {
    items
        .iter()
        .fold(InventoryValuation::default(), |mut acc, item| {
            let quantity = f64::from(item.quantity);
            let cost = quantity * effective_unit_cost(item, cost_ratio);
            let retail = quantity * item.price;
            acc.total_cost_value += cost;
            acc.total_retail_value += retail;
            acc.total_profit_potential += retail - cost;
            acc.item_count += 1;
            acc.total_quantity += u64::from(item.quantity);
            acc
        })
}

/// Group `items` by category, keeping first-encounter order.
pub fn categorize(items: &[InventoryItem], cost_ratio: f64) -> Vec<CategoryBreakdown> {
    let mut categories: Vec<CategoryBreakdown> = Vec::new();
    for item in items {
        let name = item.category_or_default();
        let idx = match categories.iter().position(|c| c.name == name) {
            Some(idx) => idx,
            None => {
                categories.push(CategoryBreakdown {
                    name: name.to_string(),
                    item_count: 0,
                    total_quantity: 0,
                    cost_value: 0.0,
                    retail_value: 0.0,
                    profit_margin: 0.0,
                });
                categories.len() - 1
            }
        };
        let quantity = f64::from(item.quantity);
        let entry = &mut categories[idx];
        entry.item_count += 1;
        entry.total_quantity += u64::from(item.quantity);
        entry.cost_value += quantity * effective_unit_cost(item, cost_ratio);
        entry.retail_value += quantity * item.price;
    }

    for c in &mut categories {
        c.profit_margin = if c.retail_value > 0.0 {
            round_cents((c.retail_value - c.cost_value) / c.retail_value * 100.0)
        } else {
            0.0
        };
    }
    categories
}
