// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for Stockvox.
//!
//! TOML files in an XDG hierarchy, `STOCKVOX_*` environment overrides, strict
//! `deny_unknown_fields` parsing, and miette diagnostics with typo hints.
//!
//! # Usage
//!
//! ```no_run
//! use stockvox_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("sales tax: {}", config.finance.sales_tax_rate);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{
    AssistantConfig, DEFAULT_COST_RATIO, DEFAULT_FEDERAL_TAX_RATE, DEFAULT_SALES_TAX_RATE,
    DEFAULT_STATE_TAX_RATE, FinanceConfig, StockvoxConfig,
};

/// Load from the standard hierarchy and validate.
pub fn load_and_validate() -> Result<StockvoxConfig, Vec<ConfigError>> {
    finish(loader::load_config(), collect_toml_sources)
}

/// Load from an explicit file and validate.
pub fn load_and_validate_path(path: &Path) -> Result<StockvoxConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_path(path), || {
        read_source(path).into_iter().collect()
    })
}

/// Load from an inline TOML string and validate.
pub fn load_and_validate_str(toml_content: &str) -> Result<StockvoxConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content), || {
        vec![("<inline>".to_string(), toml_content.to_string())]
    })
}

fn finish(
    loaded: Result<StockvoxConfig, figment::Error>,
    sources: impl FnOnce() -> Vec<(String, String)>,
) -> Result<StockvoxConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err, &sources())),
    }
}

fn read_source(path: &Path) -> Option<(String, String)> {
    std::fs::read_to_string(path)
        .ok()
        .map(|content| (path.display().to_string(), content))
}

/// Read every config file in the hierarchy so errors can point into them.
fn collect_toml_sources() -> Vec<(String, String)> {
    let local = std::env::current_dir()
        .map(|d| d.join(loader::LOCAL_CONFIG))
        .unwrap_or_else(|_| loader::LOCAL_CONFIG.into());

    [
        Some(local),
        loader::user_config_path(),
        Some(loader::SYSTEM_CONFIG.into()),
    ]
    .into_iter()
    .flatten()
    .filter_map(|p| read_source(&p))
    .collect()
}
