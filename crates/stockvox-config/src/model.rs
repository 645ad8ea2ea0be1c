// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Stockvox.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a typo in
//! `stockvox.toml` is reported instead of silently ignored.

use serde::{Deserialize, Serialize};

/// Sales tax rate applied when none is configured (8.25%).
pub const DEFAULT_SALES_TAX_RATE: f64 = 0.0825;

/// State tax rate applied when none is configured (8%).
pub const DEFAULT_STATE_TAX_RATE: f64 = 0.08;

/// Federal corporate tax rate applied when none is configured (21%).
pub const DEFAULT_FEDERAL_TAX_RATE: f64 = 0.21;

/// Cost assumed per unit of retail price when an item has no cost price.
pub const DEFAULT_COST_RATIO: f64 = 0.7;

/// Top-level Stockvox configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StockvoxConfig {
    /// Command interpreter and logging settings.
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Tax rates, cost approximation, and recommendation thresholds.
    #[serde(default)]
    pub finance: FinanceConfig,
}

/// Command interpreter settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AssistantConfig {
    /// Display name used in the shell prompt.
    #[serde(default = "default_assistant_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Number of conversation entries surfaced on read.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Maximum number of suggestions offered for an unmatched utterance.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// BCP-47 language tag handed to the speech capture layer.
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: default_assistant_name(),
            log_level: default_log_level(),
            history_limit: default_history_limit(),
            suggestion_limit: default_suggestion_limit(),
            language: default_language(),
        }
    }
}

fn default_assistant_name() -> String {
    "stockvox".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_history_limit() -> usize {
    10
}

fn default_suggestion_limit() -> usize {
    3
}

fn default_language() -> String {
    "en-US".to_string()
}

/// Financial calculator settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FinanceConfig {
    /// Sales tax applied to invoices when no explicit rate is given.
    #[serde(default = "default_sales_tax_rate")]
    pub sales_tax_rate: f64,

    /// State tax on costs and year-end profit.
    #[serde(default = "default_state_tax_rate")]
    pub state_tax_rate: f64,

    /// Federal corporate tax on year-end profit.
    #[serde(default = "default_federal_tax_rate")]
    pub federal_tax_rate: f64,

    /// Fraction of the retail price assumed as cost when an item has none.
    #[serde(default = "default_cost_ratio")]
    pub default_cost_ratio: f64,

    /// ISO 4217 code used when formatting money.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Overall margin percentage below which a low-margin warning is raised.
    #[serde(default = "default_low_margin_threshold_pct")]
    pub low_margin_threshold_pct: f64,

    /// Average units per item above which stock is reported as high.
    #[serde(default = "default_high_stock_multiplier")]
    pub high_stock_multiplier: u32,
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self {
            sales_tax_rate: default_sales_tax_rate(),
            state_tax_rate: default_state_tax_rate(),
            federal_tax_rate: default_federal_tax_rate(),
            default_cost_ratio: default_cost_ratio(),
            currency: default_currency(),
            low_margin_threshold_pct: default_low_margin_threshold_pct(),
            high_stock_multiplier: default_high_stock_multiplier(),
        }
    }
}

fn default_sales_tax_rate() -> f64 {
    DEFAULT_SALES_TAX_RATE
}

fn default_state_tax_rate() -> f64 {
    DEFAULT_STATE_TAX_RATE
}

fn default_federal_tax_rate() -> f64 {
    DEFAULT_FEDERAL_TAX_RATE
}

fn default_cost_ratio() -> f64 {
    DEFAULT_COST_RATIO
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_low_margin_threshold_pct() -> f64 {
    20.0
}

fn default_high_stock_multiplier() -> u32 {
    50
}
