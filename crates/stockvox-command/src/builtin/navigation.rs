// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Page navigation and browser-style system commands.

use stockvox_core::Route;

use crate::interpreter::CommandInterpreter;

/// Phrase groups, destination, and confirmation for each page.
const PAGES: &[(&[&str], Route, &str)] = &[
    (
        &["dashboard", "go to dashboard", "show dashboard"],
        Route::Dashboard,
        "Navigating to dashboard",
    ),
    (
        &["items", "show items", "display items", "view items"],
        Route::Items,
        "Opening items page",
    ),
    (
        &["add item", "new item", "add new item", "create item"],
        Route::AddItem,
        "Opening add item page",
    ),
    (
        &["analytics", "show analytics", "view analytics", "reports"],
        Route::Analytics,
        "Opening analytics page",
    ),
    (
        &["retrieve", "retrieve items", "get items"],
        Route::Retrieve,
        "Opening retrieve items page",
    ),
    (
        &["financial", "financial reports", "finances"],
        Route::Financial,
        "Opening financial reports",
    ),
    (
        &["fruit", "fruit freshness", "check freshness"],
        Route::FruitFreshness,
        "Opening fruit freshness detector",
    ),
    (
        &["news", "show news", "business news"],
        Route::News,
        "Opening news page",
    ),
    (
        &["home", "go home", "main page"],
        Route::Home,
        "Going to home page",
    ),
];

pub fn register(interp: &mut CommandInterpreter) {
    for &(phrases, route, confirmation) in PAGES {
        interp.add_command(phrases, move |ctx| {
            ctx.navigate(route);
            ctx.speak(confirmation);
            Ok(())
        });
    }

    interp.add_command(["refresh", "refresh page", "reload"], |ctx| {
        ctx.reload();
        ctx.speak("Refreshing page");
        Ok(())
    });

    interp.add_command(["back", "go back"], |ctx| {
        ctx.go_back();
        ctx.speak("Going back");
        Ok(())
    });
}
