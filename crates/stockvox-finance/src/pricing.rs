// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Margin, markup and tax primitives.
//!
//! Margin divides by the selling price, markup by the cost. Both return
//! percentages rounded to cents precision and guard their divisor.

use crate::money::round_cents;

/// Profit margin percentage: `(selling - cost) / selling * 100`.
///
/// Returns 0 when `selling` is 0.
pub fn profit_margin(selling: f64, cost: f64) -> f64 {
    if selling == 0.0 {
        return 0.0;
    }
    round_cents((selling - cost) / selling * 100.0)
}

/// Markup percentage: `(selling - cost) / cost * 100`.
///
/// Returns 0 when `cost` is 0.
pub fn markup(selling: f64, cost: f64) -> f64 {
    if cost == 0.0 {
        return 0.0;
    }
    round_cents((selling - cost) / cost * 100.0)
}

/// Tax owed on `amount` at `rate`, rounded to cents.
pub fn tax_on(amount: f64, rate: f64) -> f64 {
    round_cents(amount * rate)
}

/// `base` plus the selected taxes, each computed on `base`.
pub fn with_taxes(base: f64, state_rate: Option<f64>, federal_rate: Option<f64>) -> f64 {
    let state = state_rate.map_or(0.0, |r| base * r);
    let federal = federal_rate.map_or(0.0, |r| base * r);
    round_cents(base + state + federal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn margin_examples() {
        assert!((profit_margin(100.0, 70.0) - 30.0).abs() < 1e-9);
        assert!((profit_margin(3.0, 1.0) - 66.67).abs() < 1e-9);
        assert!((profit_margin(50.0, 80.0) - -60.0).abs() < 1e-9);
    }

    #[test]
    fn zero_selling_price_has_zero_margin() {
        assert_eq!(profit_margin(0.0, 10.0), 0.0);
        assert_eq!(profit_margin(0.0, 0.0), 0.0);
    }

    #[test]
    fn markup_divides_by_cost() {
        assert!((markup(100.0, 70.0) - 42.86).abs() < 1e-9);
        assert!((markup(20.0, 10.0) - 100.0).abs() < 1e-9);
        assert_eq!(markup(20.0, 0.0), 0.0);
    }

    #[test]
    fn tax_is_rounded() {
        assert!((tax_on(20.0, 0.0825) - 1.65).abs() < 1e-9);
        assert!((tax_on(9.99, 0.0825) - 0.82).abs() < 1e-9);
        assert_eq!(tax_on(100.0, 0.0), 0.0);
    }

    #[test]
    fn with_taxes_adds_selected_rates() {
        assert!((with_taxes(100.0, None, None) - 100.0).abs() < 1e-9);
        assert!((with_taxes(100.0, Some(0.08), None) - 108.0).abs() < 1e-9);
        assert!((with_taxes(100.0, Some(0.08), Some(0.21)) - 129.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn equal_prices_have_zero_margin(x in 0.01f64..1_000_000.0) {
            prop_assert_eq!(profit_margin(x, x), 0.0);
            prop_assert_eq!(markup(x, x), 0.0);
        }

        #[test]
        fn free_goods_have_full_margin(x in 0.01f64..1_000_000.0) {
            prop_assert!((profit_margin(x, 0.0) - 100.0).abs() < 1e-9);
        }

        #[test]
        fn margin_never_exceeds_hundred_for_non_negative_cost(
            selling in 0.01f64..100_000.0,
            cost in 0.0f64..100_000.0,
        ) {
            prop_assert!(profit_margin(selling, cost) <= 100.0);
        }
    }
}
