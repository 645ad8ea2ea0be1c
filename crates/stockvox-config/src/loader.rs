// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading with Figment.
//!
//! Lookup order: `./stockvox.toml` > `~/.config/stockvox/stockvox.toml` >
//! `/etc/stockvox/stockvox.toml`, with `STOCKVOX_` environment overrides on top.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::StockvoxConfig;

/// Local config file name.
pub const LOCAL_CONFIG: &str = "stockvox.toml";

/// System-wide config path.
pub const SYSTEM_CONFIG: &str = "/etc/stockvox/stockvox.toml";

/// Per-user config path under the XDG config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("stockvox").join(LOCAL_CONFIG))
}

/// Build the full layered Figment.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/stockvox/stockvox.toml`
/// 3. `~/.config/stockvox/stockvox.toml`
/// 4. `./stockvox.toml`
/// 5. `STOCKVOX_*` environment variables
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(StockvoxConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG))
        .merge(env_provider())
}

/// Load configuration from the standard hierarchy.
pub fn load_config() -> Result<StockvoxConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string over the compiled defaults.
pub fn load_config_from_str(toml_content: &str) -> Result<StockvoxConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(StockvoxConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file, still honouring env overrides.
pub fn load_config_from_path(path: &Path) -> Result<StockvoxConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(StockvoxConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Environment provider with explicit section mapping.
///
/// `Env::split("_")` would turn `STOCKVOX_FINANCE_SALES_TAX_RATE` into
/// `finance.sales.tax.rate`; only the first segment names the section.
/// Keys reach the mapper uppercase, so they are lowercased first.
fn env_provider() -> Env {
    Env::prefixed("STOCKVOX_").map(|key| {
        key.as_str()
            .to_ascii_lowercase()
            .replacen("assistant_", "assistant.", 1)
            .replacen("finance_", "finance.", 1)
            .into()
    })
}
