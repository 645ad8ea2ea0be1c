// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runs the `stockvox` binary against temp files.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(file, "{content}").unwrap();
    file
}

fn json_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "{content}").unwrap();
    file
}

fn stockvox(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stockvox"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn margin_as_json() {
    let config = config_file("");
    let out = stockvox(config.path(), &["margin", "--price", "10", "--cost", "7", "--json"]);
    let json = stdout_json(&out);
    assert_eq!(json["profit_margin"], 30.0);
    assert_eq!(json["markup"], 42.86);
}

#[test]
fn non_viable_break_even_serializes_infinity_as_null() {
    let config = config_file("");
    let out = stockvox(
        config.path(),
        &["break-even", "--fixed", "1000", "--variable", "5", "--price", "5", "--json"],
    );
    let json = stdout_json(&out);
    assert!(json["break_even_units"].is_null());
    assert_eq!(json["error"], "Price must be higher than variable cost");
}

#[test]
fn analyze_reads_inventory_file() {
    let config = config_file("");
    let inventory = json_file(
        r#"[
            {"id": "a1", "name": "Widget", "category": "A", "quantity": 10, "price": 5},
            {"id": "b1", "name": "Gadget", "category": "B", "quantity": 5, "price": 20}
        ]"#,
    );
    let path = inventory.path().to_str().unwrap();
    let json = stdout_json(&stockvox(config.path(), &["analyze", path, "--json"]));
    assert_eq!(json["overall"]["avg_profit_margin"], 30.0);
    assert_eq!(json["categories"][0]["name"], "A");
    assert_eq!(json["recommendations"][0]["title"], "Top Performing Category");
}

#[test]
fn invoice_uses_configured_sales_tax() {
    let config = config_file("[finance]\nsales_tax_rate = 0.1\n");
    let request = json_file(
        r#"{
            "invoice_number": "INV-7",
            "customer": {"name": "Harbor Cafe"},
            "items": [{"description": "Beans", "quantity": 2, "unit_price": 10}],
            "issue_date": "2026-05-01"
        }"#,
    );
    let path = request.path().to_str().unwrap();
    let json = stdout_json(&stockvox(config.path(), &["invoice", path, "--json"]));
    assert_eq!(json["calculations"]["tax_amount"], 2.0);
    assert_eq!(json["calculations"]["total"], 22.0);
    assert_eq!(json["issue_date"], "2026-05-01");
}

#[test]
fn config_prints_resolved_toml() {
    let config = config_file("[assistant]\nname = \"clerk\"\n");
    let out = stockvox(config.path(), &["config"]);
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.contains("name = \"clerk\""));
    assert!(text.contains("[finance]"));
}

#[test]
fn invalid_config_exits_with_failure() {
    let config = config_file("[finance]\nsales_tax_rat = 0.1\n");
    let out = stockvox(config.path(), &["config"]);
    assert!(!out.status.success());
}

#[test]
fn missing_input_file_exits_with_failure() {
    let config = config_file("");
    let out = stockvox(config.path(), &["analyze", "/nonexistent/inventory.json"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("error"));
}
