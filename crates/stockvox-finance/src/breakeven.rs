// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Break-even point.

use serde::Serialize;

use crate::money::round_cents;

/// Reported when the unit price does not cover the unit variable cost.
pub const NON_VIABLE_PRICE: &str = "Price must be higher than variable cost";

/// Units and revenue needed to cover fixed costs.
///
/// A price at or below the variable cost yields infinite units and revenue,
/// no contribution figures, and `error` set. Infinity serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakEvenAnalysis {
    pub break_even_units: f64,
    pub break_even_revenue: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution_margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution_margin_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BreakEvenAnalysis {
    pub fn is_viable(&self) -> bool {
        self.error.is_none()
    }
}

pub fn break_even(fixed_costs: f64, variable_cost: f64, price: f64) -> BreakEvenAnalysis {
    let contribution = price - variable_cost;
    if contribution <= 0.0 {
        return BreakEvenAnalysis {
            break_even_units: f64::INFINITY,
            break_even_revenue: f64::INFINITY,
            contribution_margin: None,
            contribution_margin_percentage: None,
            error: Some(NON_VIABLE_PRICE.to_string()),
        };
    }

    let units = (fixed_costs / contribution).ceil();
    BreakEvenAnalysis {
        break_even_units: units,
        break_even_revenue: round_cents(units * price),
        contribution_margin: Some(round_cents(contribution)),
        contribution_margin_percentage: Some(round_cents(contribution / price * 100.0)),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_units_up() {
        let a = break_even(1000.0, 5.0, 8.0);
        assert!(a.is_viable());
        assert_eq!(a.break_even_units, 334.0);
        assert!((a.break_even_revenue - 2672.0).abs() < 1e-9);
        assert_eq!(a.contribution_margin, Some(3.0));
        assert_eq!(a.contribution_margin_percentage, Some(37.5));
    }

    #[test]
    fn exact_division_needs_no_extra_unit() {
        let a = break_even(1000.0, 5.0, 10.0);
        assert_eq!(a.break_even_units, 200.0);
        assert!((a.break_even_revenue - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn price_equal_to_variable_cost_is_not_viable() {
        let a = break_even(1000.0, 5.0, 5.0);
        assert!(!a.is_viable());
        assert!(a.break_even_units.is_infinite());
        assert!(a.break_even_revenue.is_infinite());
        assert_eq!(a.error.as_deref(), Some(NON_VIABLE_PRICE));
        assert!(a.contribution_margin.is_none());
    }

    #[test]
    fn price_below_variable_cost_is_not_viable() {
        assert!(!break_even(10.0, 7.0, 6.0).is_viable());
    }

    #[test]
    fn zero_fixed_costs_break_even_immediately() {
        assert_eq!(break_even(0.0, 1.0, 2.0).break_even_units, 0.0);
    }
}
