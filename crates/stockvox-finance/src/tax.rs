// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Simplified year-end tax estimate.

use serde::{Deserialize, Serialize};

use crate::money::round_cents;

/// Federal and state tax on gross profit. Every field is rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearEndTax {
    pub gross_profit: f64,
    /// Cost value of the inventory on hand, reported alongside.
    pub inventory_value: f64,
    pub federal_tax: f64,
    pub state_tax: f64,
    pub total_tax: f64,
    pub net_income: f64,
}

/// Estimate taxes for `revenue - expenses` at the given rates.
///
/// A loss produces negative tax figures; no carry-forward is modelled.
pub fn estimate(
    revenue: f64,
    expenses: f64,
    inventory_value: f64,
    federal_rate: f64,
    state_rate: f64,
) -> YearEndTax {
    let gross = revenue - expenses;
    let federal = gross * federal_rate;
    let state = gross * state_rate;
    let total = federal + state;
    YearEndTax {
        gross_profit: round_cents(gross),
        inventory_value: round_cents(inventory_value),
        federal_tax: round_cents(federal),
        state_tax: round_cents(state),
        total_tax: round_cents(total),
        net_income: round_cents(gross - total),
    }
}
