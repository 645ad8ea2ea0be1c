// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Financial calculations for Stockvox.
//!
//! Margins and markups, sales and year-end tax, invoices and purchase
//! orders, inventory valuation with category analysis and recommendations,
//! and break-even points. [`FinancialCalculator`] binds the configured
//! rates; the modules underneath are plain functions over their inputs.

pub mod breakeven;
pub mod calculator;
pub mod documents;
pub mod money;
pub mod pricing;
pub mod recommend;
pub mod settings;
pub mod tax;
pub mod valuation;

pub use breakeven::{BreakEvenAnalysis, NON_VIABLE_PRICE, break_even};
pub use calculator::FinancialCalculator;
pub use documents::{
    DEFAULT_PO_TERMS, Invoice, InvoiceCalculations, InvoiceLine, InvoiceLineRequest,
    InvoiceRequest, PartyInfo, PurchaseOrder, PurchaseOrderLine, PurchaseOrderLineRequest,
    PurchaseOrderRequest,
};
pub use money::{format_currency, format_percentage, round_cents};
pub use pricing::{markup, profit_margin};
pub use recommend::{Recommendation, RecommendationKind};
pub use settings::{DEFAULT_COST_RATIO, FinanceSettings};
pub use tax::YearEndTax;
pub use valuation::{CategoryBreakdown, CostAnalysisReport, InventoryValuation, OverallSummary};
