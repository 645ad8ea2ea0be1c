// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Spoken inventory figures and search.

use stockvox_core::InventoryStats;

use crate::context::ActionContext;
use crate::interpreter::CommandInterpreter;
use crate::search::extract_search_term;

const STATS_UNAVAILABLE: &str = "Unable to retrieve inventory statistics at the moment.";

/// Which figure a data command reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsReport {
    Items,
    Value,
    Overview,
}

/// Sentence spoken for `report` over `stats`.
pub fn describe(stats: &InventoryStats, report: StatsReport) -> String {
    match report {
        StatsReport::Items => format!(
            "You have {} total items in your inventory.",
            stats.total_items
        ),
        StatsReport::Value => format!(
            "Your total inventory value is ${:.2}.",
            stats.total_value
        ),
        StatsReport::Overview => format!(
            "You have {} items worth ${:.2}. {} items are fresh.",
            stats.total_items, stats.total_value, stats.fresh_count
        ),
    }
}

fn speak_stats(ctx: &mut ActionContext<'_>, report: StatsReport) {
    let line = match ctx.inventory_stats() {
        Some(stats) => describe(&stats, report),
        None => STATS_UNAVAILABLE.to_string(),
    };
    ctx.speak(line);
}

pub fn register(interp: &mut CommandInterpreter) {
    interp.add_command(["total items", "how many items", "item count"], |ctx| {
        speak_stats(ctx, StatsReport::Items);
        Ok(())
    });

    interp.add_command(["total value", "inventory value", "how much worth"], |ctx| {
        speak_stats(ctx, StatsReport::Value);
        Ok(())
    });

    interp.add_command(["inventory status", "status", "overview"], |ctx| {
        speak_stats(ctx, StatsReport::Overview);
        Ok(())
    });

    interp.add_command("search", |ctx| {
        if let Some(term) = extract_search_term(ctx.transcript()).map(str::to_string) {
            ctx.speak(format!("Searching for {term}"));
            ctx.search(&term);
        }
        Ok(())
    });
}
