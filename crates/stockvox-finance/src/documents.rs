// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Invoices and purchase orders.
//!
//! Generated documents are plain values; nothing here stores or numbers
//! them. Request types accept both snake_case and camelCase field names.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::round_cents;
use crate::pricing::tax_on;

/// Payment terms printed on a purchase order when none are given.
pub const DEFAULT_PO_TERMS: &str = "Net 30";

/// Customer or vendor contact block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartyInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineRequest {
    pub description: String,
    pub quantity: f64,
    #[serde(alias = "unitPrice")]
    pub unit_price: f64,
}

/// Input to invoice generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    #[serde(alias = "invoiceNumber")]
    pub invoice_number: String,
    #[serde(alias = "customerInfo")]
    pub customer: PartyInfo,
    pub items: Vec<InvoiceLineRequest>,
    /// Defaults to today.
    #[serde(default, alias = "issueDate")]
    pub issue_date: Option<NaiveDate>,
    #[serde(default, alias = "dueDate")]
    pub due_date: Option<NaiveDate>,
    /// Fraction, e.g. `0.0825`. Defaults to the configured sales tax rate.
    #[serde(default, alias = "taxRate")]
    pub tax_rate: Option<f64>,
    /// Percentage, e.g. `10.0` for 10%.
    #[serde(default, alias = "discountRate")]
    pub discount_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub line_total: f64,
}

/// Money totals of an invoice, each rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceCalculations {
    pub subtotal: f64,
    pub discount_rate: f64,
    pub discount_amount: f64,
    pub tax_rate: f64,
    pub tax_amount: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_number: String,
    pub customer: PartyInfo,
    pub items: Vec<InvoiceLine>,
    pub issue_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub calculations: InvoiceCalculations,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderLineRequest {
    pub description: String,
    pub quantity: f64,
    #[serde(alias = "unitCost")]
    pub unit_cost: f64,
}

/// Input to purchase order generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderRequest {
    #[serde(alias = "poNumber")]
    pub po_number: String,
    #[serde(alias = "vendorInfo")]
    pub vendor: PartyInfo,
    pub items: Vec<PurchaseOrderLineRequest>,
    #[serde(default, alias = "orderDate")]
    pub order_date: Option<NaiveDate>,
    #[serde(default, alias = "expectedDelivery")]
    pub expected_delivery: Option<NaiveDate>,
    #[serde(default)]
    pub terms: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderLine {
    pub description: String,
    pub quantity: f64,
    pub unit_cost: f64,
    pub line_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub po_number: String,
    pub vendor: PartyInfo,
    pub items: Vec<PurchaseOrderLine>,
    pub order_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_delivery: Option<NaiveDate>,
    pub terms: String,
    pub total: f64,
}

/// Build an invoice. `default_tax_rate` applies when the request has no
/// rate; `today` fills a missing issue date.
///
/// Discount comes off the subtotal before tax. Negative quantities or
/// prices are not rejected.
pub fn build_invoice(request: &InvoiceRequest, default_tax_rate: f64, today: NaiveDate) -> Invoice {
    let items: Vec<InvoiceLine> = request
        .items
        .iter()
        .map(|line| InvoiceLine {
            description: line.description.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price,
            line_total: round_cents(line.quantity * line.unit_price),
        })
        .collect();

    let subtotal: f64 = request
        .items
        .iter()
        .map(|line| line.quantity * line.unit_price)
        .sum();
    let discount_amount = subtotal * (request.discount_rate / 100.0);
    let taxable = subtotal - discount_amount;
    let tax_rate = request.tax_rate.unwrap_or(default_tax_rate);
    let tax_amount = tax_on(taxable, tax_rate);

    Invoice {
        invoice_number: request.invoice_number.clone(),
        customer: request.customer.clone(),
        items,
        issue_date: request.issue_date.unwrap_or(today),
        due_date: request.due_date,
        calculations: InvoiceCalculations {
            subtotal: round_cents(subtotal),
            discount_rate: request.discount_rate,
            discount_amount: round_cents(discount_amount),
            tax_rate,
            tax_amount,
            total: round_cents(taxable + tax_amount),
        },
    }
}

/// Build a purchase order. No tax or discount applies.
pub fn build_purchase_order(request: &PurchaseOrderRequest, today: NaiveDate) -> PurchaseOrder {
    let items: Vec<PurchaseOrderLine> = request
        .items
        .iter()
        .map(|line| PurchaseOrderLine {
            description: line.description.clone(),
            quantity: line.quantity,
            unit_cost: line.unit_cost,
            line_total: round_cents(line.quantity * line.unit_cost),
        })
        .collect();
    let total: f64 = request
        .items
        .iter()
        .map(|line| line.quantity * line.unit_cost)
        .sum();

    PurchaseOrder {
        po_number: request.po_number.clone(),
        vendor: request.vendor.clone(),
        items,
        order_date: request.order_date.unwrap_or(today),
        expected_delivery: request.expected_delivery,
        terms: request
            .terms
            .clone()
            .unwrap_or_else(|| DEFAULT_PO_TERMS.to_string()),
        total: round_cents(total),
    }
}
