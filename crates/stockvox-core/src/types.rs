// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the command interpreter and the financial calculator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Category name used when an item carries none.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Display-only freshness grading attached to perishable items.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum FreshnessStatus {
    Fresh,
    Good,
    Fair,
    Expired,
}

/// A single inventory record as supplied by the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub quantity: u32,
    pub price: f64,
    /// Unit cost. When absent the calculator approximates it from `price`.
    #[serde(default, alias = "costPrice")]
    pub cost_price: Option<f64>,
    #[serde(default, alias = "freshnessStatus")]
    pub freshness: Option<FreshnessStatus>,
}

impl InventoryItem {
    /// Category key used for grouping.
    pub fn category_or_default(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => UNCATEGORIZED,
        }
    }

    /// Retail value of the stock on hand.
    pub fn retail_value(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

/// Headline inventory numbers used by spoken data commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryStats {
    pub total_items: usize,
    pub total_value: f64,
    pub total_quantity: u64,
    pub fresh_count: usize,
}

impl InventoryStats {
    /// Derive stats from an item snapshot.
    pub fn from_items(items: &[InventoryItem]) -> Self {
        Self {
            total_items: items.len(),
            total_value: items.iter().map(InventoryItem::retail_value).sum(),
            total_quantity: items.iter().map(|i| u64::from(i.quantity)).sum(),
            fresh_count: items
                .iter()
                .filter(|i| i.freshness == Some(FreshnessStatus::Fresh))
                .count(),
        }
    }
}

/// Who produced a conversation entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn in the assistant conversation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl ConversationEntry {
    pub fn user(text: impl Into<String>, confidence: Option<f32>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            timestamp: Utc::now(),
            confidence,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            timestamp: Utc::now(),
            confidence: None,
        }
    }
}

/// Pages the assistant can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
pub enum Route {
    Home,
    Dashboard,
    Items,
    AddItem,
    Analytics,
    Retrieve,
    Financial,
    FruitFreshness,
    News,
}

impl Route {
    /// URL path of the page.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Dashboard => "/dashboard",
            Route::Items => "/items",
            Route::AddItem => "/add-item",
            Route::Analytics => "/analytics",
            Route::Retrieve => "/retrieve",
            Route::Financial => "/financial",
            Route::FruitFreshness => "/fruit-freshness",
            Route::News => "/news",
        }
    }
}
