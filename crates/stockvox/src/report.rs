// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Human-readable rendering of finance results.

use std::fmt::Write;

use colored::Colorize;
use serde::Serialize;
use stockvox_finance::{
    BreakEvenAnalysis, CostAnalysisReport, FinancialCalculator, Invoice, PartyInfo,
    PurchaseOrder, RecommendationKind, YearEndTax, round_cents,
};

/// Margin and markup for one price pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarginSummary {
    pub selling_price: f64,
    pub cost: f64,
    pub profit_per_unit: f64,
    pub profit_margin: f64,
    pub markup: f64,
}

impl MarginSummary {
    pub fn new(calc: &FinancialCalculator, selling_price: f64, cost: f64) -> Self {
        Self {
            selling_price,
            cost,
            profit_per_unit: round_cents(selling_price - cost),
            profit_margin: calc.profit_margin(selling_price, cost),
            markup: calc.markup(selling_price, cost),
        }
    }
}

pub fn render_cost_analysis(calc: &FinancialCalculator, report: &CostAnalysisReport) -> String {
    let v = &report.overall.valuation;
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Inventory cost analysis".bold());
    let _ = writeln!(out, "  items:            {}", v.item_count);
    let _ = writeln!(out, "  units:            {}", v.total_quantity);
    let _ = writeln!(out, "  cost value:       {}", calc.format_currency(v.total_cost_value));
    let _ = writeln!(out, "  retail value:     {}", calc.format_currency(v.total_retail_value));
    let _ = writeln!(
        out,
        "  profit potential: {}",
        calc.format_currency(v.total_profit_potential)
    );
    let _ = writeln!(
        out,
        "  average margin:   {}",
        calc.format_percentage(report.overall.avg_profit_margin)
    );

    if !report.categories.is_empty() {
        let _ = writeln!(out, "\n{}", "Categories".bold());
        for c in &report.categories {
            let _ = writeln!(
                out,
                "  {:<20} {:>4} items {:>6} units  cost {}  retail {}  margin {}",
                c.name,
                c.item_count,
                c.total_quantity,
                calc.format_currency(c.cost_value),
                calc.format_currency(c.retail_value),
                calc.format_percentage(c.profit_margin),
            );
        }
    }

    if !report.recommendations.is_empty() {
        let _ = writeln!(out, "\n{}", "Recommendations".bold());
        for r in &report.recommendations {
            let tag = match r.kind {
                RecommendationKind::Warning => r.kind.to_string().yellow(),
                RecommendationKind::Success => r.kind.to_string().green(),
                RecommendationKind::Info => r.kind.to_string().cyan(),
            };
            let _ = writeln!(out, "  [{tag}] {}: {}", r.title, r.description);
            let _ = writeln!(out, "         -> {}", r.action);
        }
    }
    out
}

fn render_party(out: &mut String, label: &str, party: &PartyInfo) {
    let _ = writeln!(out, "{label}: {}", party.name);
    for detail in [&party.email, &party.phone, &party.address].into_iter().flatten() {
        let _ = writeln!(out, "  {detail}");
    }
}

pub fn render_invoice(calc: &FinancialCalculator, invoice: &Invoice) -> String {
    let c = &invoice.calculations;
    let mut out = String::new();
    let _ = writeln!(out, "{}", format!("Invoice {}", invoice.invoice_number).bold());
    let _ = writeln!(out, "Issued: {}", invoice.issue_date);
    if let Some(due) = invoice.due_date {
        let _ = writeln!(out, "Due:    {due}");
    }
    render_party(&mut out, "Bill to", &invoice.customer);
    out.push('\n');
    for line in &invoice.items {
        let _ = writeln!(
            out,
            "  {:<30} {:>8} x {:>12} = {:>12}",
            line.description,
            line.quantity,
            calc.format_currency(line.unit_price),
            calc.format_currency(line.line_total),
        );
    }
    let _ = writeln!(out, "\n  Subtotal: {}", calc.format_currency(c.subtotal));
    if c.discount_amount != 0.0 {
        let _ = writeln!(
            out,
            "  Discount ({}): -{}",
            calc.format_percentage(c.discount_rate),
            calc.format_currency(c.discount_amount)
        );
    }
    let _ = writeln!(
        out,
        "  Tax ({}): {}",
        calc.format_percentage(c.tax_rate * 100.0),
        calc.format_currency(c.tax_amount)
    );
    let _ = writeln!(out, "  Total: {}", calc.format_currency(c.total));
    out
}

pub fn render_purchase_order(calc: &FinancialCalculator, po: &PurchaseOrder) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format!("Purchase order {}", po.po_number).bold());
    let _ = writeln!(out, "Ordered: {}", po.order_date);
    if let Some(expected) = po.expected_delivery {
        let _ = writeln!(out, "Expected: {expected}");
    }
    let _ = writeln!(out, "Terms: {}", po.terms);
    render_party(&mut out, "Vendor", &po.vendor);
    out.push('\n');
    for line in &po.items {
        let _ = writeln!(
            out,
            "  {:<30} {:>8} x {:>12} = {:>12}",
            line.description,
            line.quantity,
            calc.format_currency(line.unit_cost),
            calc.format_currency(line.line_total),
        );
    }
    let _ = writeln!(out, "\n  Total: {}", calc.format_currency(po.total));
    out
}

pub fn render_break_even(calc: &FinancialCalculator, analysis: &BreakEvenAnalysis) -> String {
    if let Some(error) = &analysis.error {
        return format!("{}: {error}\n", "not viable".red());
    }
    let mut out = String::new();
    let _ = writeln!(out, "Break-even units:   {}", analysis.break_even_units);
    let _ = writeln!(
        out,
        "Break-even revenue: {}",
        calc.format_currency(analysis.break_even_revenue)
    );
    if let (Some(cm), Some(pct)) = (
        analysis.contribution_margin,
        analysis.contribution_margin_percentage,
    ) {
        let _ = writeln!(
            out,
            "Contribution:       {} per unit ({})",
            calc.format_currency(cm),
            calc.format_percentage(pct)
        );
    }
    out
}

pub fn render_margin(calc: &FinancialCalculator, summary: &MarginSummary) -> String {
    format!(
        "Profit per unit: {}\nMargin: {}\nMarkup: {}\n",
        calc.format_currency(summary.profit_per_unit),
        calc.format_percentage(summary.profit_margin),
        calc.format_percentage(summary.markup),
    )
}

pub fn render_taxes(calc: &FinancialCalculator, tax: &YearEndTax) -> String {
    let rows = [
        ("Gross profit", tax.gross_profit),
        ("Inventory value", tax.inventory_value),
        ("Federal tax", tax.federal_tax),
        ("State tax", tax.state_tax),
        ("Total tax", tax.total_tax),
        ("Net income", tax.net_income),
    ];
    let mut out = String::new();
    for (label, amount) in rows {
        let _ = writeln!(out, "{label:<16} {}", calc.format_currency(amount));
    }
    out
}
