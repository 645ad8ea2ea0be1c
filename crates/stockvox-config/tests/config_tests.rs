// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Stockvox configuration system.

use std::io::Write;
use std::path::Path;

use stockvox_config::diagnostic::ConfigError;
use stockvox_config::model::StockvoxConfig;
use stockvox_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};

#[test]
fn full_toml_deserializes() {
    let toml = r#"
[assistant]
name = "backroom"
log_level = "debug"
history_limit = 20
suggestion_limit = 5
language = "en-GB"

[finance]
sales_tax_rate = 0.07
state_tax_rate = 0.05
federal_tax_rate = 0.21
default_cost_ratio = 0.6
currency = "EUR"
low_margin_threshold_pct = 25.0
high_stock_multiplier = 40
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.assistant.name, "backroom");
    assert_eq!(config.assistant.log_level, "debug");
    assert_eq!(config.assistant.history_limit, 20);
    assert_eq!(config.assistant.suggestion_limit, 5);
    assert_eq!(config.assistant.language, "en-GB");
    assert_eq!(config.finance.sales_tax_rate, 0.07);
    assert_eq!(config.finance.default_cost_ratio, 0.6);
    assert_eq!(config.finance.currency, "EUR");
    assert_eq!(config.finance.high_stock_multiplier, 40);
}

#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config.assistant.name, "stockvox");
    assert_eq!(config.assistant.history_limit, 10);
    assert_eq!(config.assistant.suggestion_limit, 3);
    assert_eq!(config.finance.sales_tax_rate, 0.0825);
    assert_eq!(config.finance.state_tax_rate, 0.08);
    assert_eq!(config.finance.federal_tax_rate, 0.21);
    assert_eq!(config.finance.default_cost_ratio, 0.7);
    assert_eq!(config.finance.currency, "USD");
    assert_eq!(config.finance.low_margin_threshold_pct, 20.0);
    assert_eq!(config.finance.high_stock_multiplier, 50);
}

#[test]
fn unknown_key_is_reported_with_suggestion() {
    let toml = r#"
[finance]
sales_tax_rat = 0.05
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown key");
    let suggestion = errors.iter().find_map(|e| match e {
        ConfigError::UnknownKey { key, suggestion, .. } if key == "sales_tax_rat" => {
            suggestion.clone()
        }
        _ => None,
    });
    assert_eq!(suggestion.as_deref(), Some("sales_tax_rate"));
}

#[test]
fn wrong_type_is_reported() {
    let toml = r#"
[assistant]
history_limit = "ten"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject wrong type");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { .. })),
        "expected an InvalidType error, got: {errors:?}"
    );
}

#[test]
fn out_of_range_values_fail_validation() {
    let toml = r#"
[finance]
sales_tax_rate = 8.25
"#;

    let errors = load_and_validate_str(toml).expect_err("rate above 1 should fail");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("sales_tax_rate"))
    ));
}

#[test]
fn dotted_override_replaces_file_value() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let config: StockvoxConfig = Figment::new()
        .merge(Serialized::defaults(StockvoxConfig::default()))
        .merge(Toml::string("[finance]\nsales_tax_rate = 0.05\n"))
        .merge(("finance.sales_tax_rate", 0.06))
        .extract()
        .expect("override should merge");

    assert_eq!(config.finance.sales_tax_rate, 0.06);
}

#[test]
fn env_overrides_reach_both_sections() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("stockvox.toml", "[finance]\nsales_tax_rate = 0.05\n")?;
        jail.set_env("STOCKVOX_FINANCE_SALES_TAX_RATE", "0.06");
        jail.set_env("STOCKVOX_ASSISTANT_HISTORY_LIMIT", "4");
        jail.set_env("STOCKVOX_ASSISTANT_LOG_LEVEL", "debug");

        let config = load_and_validate_path(Path::new("stockvox.toml"))
            .map_err(|errors| format!("env overrides rejected: {errors:?}"))?;
        assert_eq!(config.finance.sales_tax_rate, 0.06);
        assert_eq!(config.assistant.history_limit, 4);
        assert_eq!(config.assistant.log_level, "debug");
        Ok(())
    });
}

#[test]
fn loads_from_explicit_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[assistant]\nname = \"from-file\"").expect("write config");

    let config = load_and_validate_path(file.path()).expect("file config should load");
    assert_eq!(config.assistant.name, "from-file");
    assert_eq!(config.finance.currency, "USD");
}
