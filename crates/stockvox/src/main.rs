// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stockvox - inventory assistant and small-business finance calculator.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod input;
mod report;
mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use stockvox_config::StockvoxConfig;
use stockvox_core::StockvoxError;
use stockvox_finance::FinancialCalculator;

/// Stockvox - inventory assistant and small-business finance calculator.
#[derive(Parser, Debug)]
#[command(name = "stockvox", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Talk to the assistant from a terminal prompt.
    Shell {
        /// Inventory snapshot (JSON array of items) backing the stats commands.
        #[arg(long, value_name = "FILE")]
        inventory: Option<PathBuf>,
    },
    /// Cost analysis of an inventory snapshot.
    Analyze {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Generate an invoice from a JSON request.
    Invoice {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Generate a purchase order from a JSON request.
    PurchaseOrder {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Units and revenue needed to cover fixed costs.
    BreakEven {
        #[arg(long)]
        fixed: f64,
        #[arg(long)]
        variable: f64,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        json: bool,
    },
    /// Profit margin and markup for one price pair.
    Margin {
        #[arg(long)]
        price: f64,
        #[arg(long)]
        cost: f64,
        #[arg(long)]
        json: bool,
    },
    /// Simplified year-end tax estimate.
    Taxes {
        #[arg(long)]
        revenue: f64,
        #[arg(long)]
        expenses: f64,
        /// Inventory snapshot whose cost value is reported alongside.
        #[arg(long, value_name = "FILE")]
        inventory: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Print the resolved configuration as TOML.
    Config,
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => stockvox_config::load_and_validate_path(path),
        None => stockvox_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            stockvox_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.assistant.log_level);

    if let Err(e) = run(cli.command, config) {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

fn run(command: Option<Commands>, config: StockvoxConfig) -> Result<(), StockvoxError> {
    let calc = FinancialCalculator::from_config(&config.finance);

    match command {
        Some(Commands::Shell { inventory }) => {
            let items = inventory.as_deref().map(input::read_inventory).transpose()?;
            shell::run_shell(&config, items.as_deref())
        }
        Some(Commands::Analyze { file, json }) => {
            let items = input::read_inventory(&file)?;
            let analysis = calc.cost_analysis(&items);
            emit(json, &analysis, || report::render_cost_analysis(&calc, &analysis))
        }
        Some(Commands::Invoice { file, json }) => {
            let request = input::read_json(&file)?;
            let invoice = calc.generate_invoice(&request);
            emit(json, &invoice, || report::render_invoice(&calc, &invoice))
        }
        Some(Commands::PurchaseOrder { file, json }) => {
            let request = input::read_json(&file)?;
            let po = calc.generate_purchase_order(&request);
            emit(json, &po, || report::render_purchase_order(&calc, &po))
        }
        Some(Commands::BreakEven {
            fixed,
            variable,
            price,
            json,
        }) => {
            let analysis = calc.break_even(fixed, variable, price);
            emit(json, &analysis, || report::render_break_even(&calc, &analysis))
        }
        Some(Commands::Margin { price, cost, json }) => {
            let summary = report::MarginSummary::new(&calc, price, cost);
            emit(json, &summary, || report::render_margin(&calc, &summary))
        }
        Some(Commands::Taxes {
            revenue,
            expenses,
            inventory,
            json,
        }) => {
            let items = match inventory {
                Some(path) => input::read_inventory(&path)?,
                None => Vec::new(),
            };
            let estimate = calc.year_end_taxes(revenue, expenses, &items);
            emit(json, &estimate, || report::render_taxes(&calc, &estimate))
        }
        Some(Commands::Config) => {
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| StockvoxError::Internal(format!("failed to render config: {e}")))?;
            print!("{rendered}");
            Ok(())
        }
        None => {
            println!("stockvox: use --help for available commands");
            Ok(())
        }
    }
}

/// Print `value` as pretty JSON, or the human rendering.
fn emit<T: serde::Serialize>(
    json: bool,
    value: &T,
    human: impl FnOnce() -> String,
) -> Result<(), StockvoxError> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", human());
    }
    Ok(())
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("stockvox={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_loads_config_defaults() {
        let config = stockvox_config::load_and_validate_str("").expect("defaults are valid");
        assert_eq!(config.assistant.name, "stockvox");
    }

    #[test]
    fn cli_parses_global_config_after_subcommand() {
        let cli = Cli::try_parse_from([
            "stockvox",
            "margin",
            "--price",
            "10",
            "--cost",
            "7",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Some(Commands::Margin { json: false, .. })));
    }

    #[test]
    fn cli_parses_kebab_case_subcommands() {
        let cli = Cli::try_parse_from(["stockvox", "purchase-order", "po.json", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::PurchaseOrder { json: true, .. })));
        let cli = Cli::try_parse_from([
            "stockvox", "break-even", "--fixed", "1000", "--variable", "5", "--price", "8",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::BreakEven { .. })));
    }

    #[test]
    fn resolved_config_renders_as_toml() {
        let rendered = toml::to_string_pretty(&StockvoxConfig::default()).unwrap();
        assert!(rendered.contains("[assistant]"));
        assert!(rendered.contains("sales_tax_rate = 0.0825"));
    }
}
