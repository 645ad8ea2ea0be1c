// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Range checks that serde attributes cannot express.

use crate::diagnostic::ConfigError;
use crate::model::StockvoxConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every failure rather than stopping at the first.
pub fn validate_config(config: &StockvoxConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let assistant = &config.assistant;
    let finance = &config.finance;

    if !LOG_LEVELS.contains(&assistant.log_level.to_lowercase().as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "assistant.log_level `{}` must be one of {}",
                assistant.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if assistant.history_limit == 0 {
        errors.push(ConfigError::Validation {
            message: "assistant.history_limit must be at least 1".to_string(),
        });
    }

    if assistant.suggestion_limit == 0 {
        errors.push(ConfigError::Validation {
            message: "assistant.suggestion_limit must be at least 1".to_string(),
        });
    }

    for (key, rate) in [
        ("finance.sales_tax_rate", finance.sales_tax_rate),
        ("finance.state_tax_rate", finance.state_tax_rate),
        ("finance.federal_tax_rate", finance.federal_tax_rate),
    ] {
        if !(0.0..=1.0).contains(&rate) {
            errors.push(ConfigError::Validation {
                message: format!("{key} must be a fraction between 0 and 1, got {rate}"),
            });
        }
    }

    if !(finance.default_cost_ratio > 0.0 && finance.default_cost_ratio <= 1.0) {
        errors.push(ConfigError::Validation {
            message: format!(
                "finance.default_cost_ratio must be in (0, 1], got {}",
                finance.default_cost_ratio
            ),
        });
    }

    let currency = finance.currency.trim();
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "finance.currency `{}` is not a three-letter ISO 4217 code",
                finance.currency
            ),
        });
    }

    if finance.low_margin_threshold_pct < 0.0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "finance.low_margin_threshold_pct must be non-negative, got {}",
                finance.low_margin_threshold_pct
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
