// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rates and thresholds the calculator runs with.

use stockvox_config::FinanceConfig;

pub use stockvox_config::DEFAULT_COST_RATIO;

/// Resolved calculator settings, built once from `[finance]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceSettings {
    /// Sales tax used by invoices and `sales_tax` when no rate is passed.
    pub sales_tax_rate: f64,
    pub state_tax_rate: f64,
    pub federal_tax_rate: f64,
    /// Cost assumed per unit of retail price for items without a cost price.
    pub cost_ratio: f64,
    /// ISO 4217 code for formatted output.
    pub currency: String,
    /// Overall margin (percent) below which a low-margin warning fires.
    pub low_margin_threshold_pct: f64,
    /// Average units per item above which stock is flagged as high.
    pub high_stock_multiplier: u32,
}

impl From<&FinanceConfig> for FinanceSettings {
    fn from(config: &FinanceConfig) -> Self {
        Self {
            sales_tax_rate: config.sales_tax_rate,
            state_tax_rate: config.state_tax_rate,
            federal_tax_rate: config.federal_tax_rate,
            cost_ratio: config.default_cost_ratio,
            currency: config.currency.clone(),
            low_margin_threshold_pct: config.low_margin_threshold_pct,
            high_stock_multiplier: config.high_stock_multiplier,
        }
    }
}

impl Default for FinanceSettings {
    fn default() -> Self {
        Self::from(&FinanceConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_finance_config() {
        let s = FinanceSettings::default();
        assert!((s.sales_tax_rate - 0.0825).abs() < f64::EPSILON);
        assert!((s.state_tax_rate - 0.08).abs() < f64::EPSILON);
        assert!((s.federal_tax_rate - 0.21).abs() < f64::EPSILON);
        assert!((s.cost_ratio - DEFAULT_COST_RATIO).abs() < f64::EPSILON);
        assert_eq!(s.currency, "USD");
        assert_eq!(s.high_stock_multiplier, 50);
    }

    #[test]
    fn overrides_are_carried() {
        let config = FinanceConfig {
            default_cost_ratio: 0.5,
            currency: "EUR".into(),
            ..FinanceConfig::default()
        };
        let s = FinanceSettings::from(&config);
        assert!((s.cost_ratio - 0.5).abs() < f64::EPSILON);
        assert_eq!(s.currency, "EUR");
    }
}
