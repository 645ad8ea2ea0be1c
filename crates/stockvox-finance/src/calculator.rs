// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The calculator facade: settings bound once, pure functions underneath.

use chrono::{NaiveDate, Utc};
use stockvox_config::FinanceConfig;
use stockvox_core::InventoryItem;
use tracing::debug;

use crate::breakeven::{self, BreakEvenAnalysis};
use crate::documents::{self, Invoice, InvoiceRequest, PurchaseOrder, PurchaseOrderRequest};
use crate::money;
use crate::pricing;
use crate::recommend::{self, Recommendation, RecommendationRules};
use crate::settings::FinanceSettings;
use crate::tax::{self, YearEndTax};
use crate::valuation::{
    self, CategoryBreakdown, CostAnalysisReport, InventoryValuation, OverallSummary,
};

/// Financial operations over inventory snapshots and documents.
///
/// Holds no state besides its settings; every method is deterministic
/// apart from defaulting missing document dates to today (UTC).
#[derive(Debug, Clone, Default)]
pub struct FinancialCalculator {
    settings: FinanceSettings,
}

impl FinancialCalculator {
    pub fn new(settings: FinanceSettings) -> Self {
        Self { settings }
    }

    pub fn from_config(config: &FinanceConfig) -> Self {
        Self::new(FinanceSettings::from(config))
    }

    pub fn settings(&self) -> &FinanceSettings {
        &self.settings
    }

    pub fn profit_margin(&self, selling: f64, cost: f64) -> f64 {
        pricing::profit_margin(selling, cost)
    }

    pub fn markup(&self, selling: f64, cost: f64) -> f64 {
        pricing::markup(selling, cost)
    }

    /// Sales tax on `amount`. `None` uses the configured rate; `Some(0.0)`
    /// means no tax.
    pub fn sales_tax(&self, amount: f64, rate: Option<f64>) -> f64 {
        pricing::tax_on(amount, rate.unwrap_or(self.settings.sales_tax_rate))
    }

    /// `base` plus state and/or federal tax.
    pub fn total_cost(&self, base: f64, include_state: bool, include_federal: bool) -> f64 {
        pricing::with_taxes(
            base,
            include_state.then_some(self.settings.state_tax_rate),
            include_federal.then_some(self.settings.federal_tax_rate),
        )
    }

    pub fn generate_invoice(&self, request: &InvoiceRequest) -> Invoice {
        self.generate_invoice_on(request, today())
    }

    /// As [`generate_invoice`](Self::generate_invoice) with an explicit
    /// fallback issue date.
    pub fn generate_invoice_on(&self, request: &InvoiceRequest, today: NaiveDate) -> Invoice {
        let invoice = documents::build_invoice(request, self.settings.sales_tax_rate, today);
        debug!(
            invoice = %invoice.invoice_number,
            lines = invoice.items.len(),
            total = invoice.calculations.total,
            "invoice generated"
        );
        invoice
    }

    pub fn generate_purchase_order(&self, request: &PurchaseOrderRequest) -> PurchaseOrder {
        self.generate_purchase_order_on(request, today())
    }

    pub fn generate_purchase_order_on(
        &self,
        request: &PurchaseOrderRequest,
        today: NaiveDate,
    ) -> PurchaseOrder {
        let po = documents::build_purchase_order(request, today);
        debug!(po = %po.po_number, lines = po.items.len(), total = po.total, "purchase order generated");
        po
    }

    pub fn inventory_valuation(&self, items: &[InventoryItem]) -> InventoryValuation {
        valuation::valuate(items, self.settings.cost_ratio)
    }

    /// Valuation, category breakdown and recommendations in one report.
    pub fn cost_analysis(&self, items: &[InventoryItem]) -> CostAnalysisReport {
        let valuation = self.inventory_valuation(items);
        let categories = valuation::categorize(items, self.settings.cost_ratio);
        let recommendations = self.recommendations(&valuation, &categories);
        let avg_profit_margin = valuation.margin_pct().map_or(0.0, money::round_cents);

        debug!(
            items = valuation.item_count,
            categories = categories.len(),
            recommendations = recommendations.len(),
            avg_profit_margin,
            "cost analysis computed"
        );

        CostAnalysisReport {
            overall: OverallSummary {
                valuation,
                avg_profit_margin,
            },
            categories,
            recommendations,
        }
    }

    pub fn recommendations(
        &self,
        valuation: &InventoryValuation,
        categories: &[CategoryBreakdown],
    ) -> Vec<Recommendation> {
        recommend::recommend(
            valuation,
            categories,
            RecommendationRules {
                low_margin_threshold_pct: self.settings.low_margin_threshold_pct,
                high_stock_multiplier: self.settings.high_stock_multiplier,
            },
        )
    }

    pub fn break_even(&self, fixed_costs: f64, variable_cost: f64, price: f64) -> BreakEvenAnalysis {
        let analysis = breakeven::break_even(fixed_costs, variable_cost, price);
        if !analysis.is_viable() {
            debug!(variable_cost, price, "break-even not reachable");
        }
        analysis
    }

    pub fn year_end_taxes(&self, revenue: f64, expenses: f64, items: &[InventoryItem]) -> YearEndTax {
        let inventory_value = self.inventory_valuation(items).total_cost_value;
        tax::estimate(
            revenue,
            expenses,
            inventory_value,
            self.settings.federal_tax_rate,
            self.settings.state_tax_rate,
        )
    }

    /// Format in the configured currency.
    pub fn format_currency(&self, amount: f64) -> String {
        money::format_currency(amount, &self.settings.currency)
    }

    pub fn format_percentage(&self, value: f64) -> String {
        money::format_percentage(value)
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
