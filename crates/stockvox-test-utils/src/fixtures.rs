// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inventory snapshots shared by tests.

use stockvox_core::{FreshnessStatus, InventoryItem};

/// Item with no cost price, so the default cost ratio applies.
pub fn item(id: &str, category: Option<&str>, quantity: u32, price: f64) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        name: format!("item-{id}"),
        category: category.map(str::to_string),
        quantity,
        price,
        cost_price: None,
        freshness: None,
    }
}

/// Item with an explicit unit cost.
pub fn costed_item(
    id: &str,
    category: Option<&str>,
    quantity: u32,
    price: f64,
    cost_price: f64,
) -> InventoryItem {
    InventoryItem {
        cost_price: Some(cost_price),
        ..item(id, category, quantity, price)
    }
}

/// Two categories, no cost prices: A is 10 x $5, B is 5 x $20.
pub fn two_category_inventory() -> Vec<InventoryItem> {
    vec![item("a1", Some("A"), 10, 5.0), item("b1", Some("B"), 5, 20.0)]
}

/// A small grocery snapshot with freshness grades.
pub fn produce_inventory() -> Vec<InventoryItem> {
    let mut apples = costed_item("p1", Some("Fruit"), 120, 0.5, 0.2);
    apples.freshness = Some(FreshnessStatus::Fresh);
    let mut bananas = costed_item("p2", Some("Fruit"), 80, 0.3, 0.1);
    bananas.freshness = Some(FreshnessStatus::Good);
    let mut milk = costed_item("d1", Some("Dairy"), 30, 2.5, 1.5);
    milk.freshness = Some(FreshnessStatus::Fresh);
    let bags = item("m1", None, 200, 0.1);
    vec![apples, bananas, milk, bags]
}
