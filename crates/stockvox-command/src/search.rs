// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! "search for X" extraction.

use std::sync::LazyLock;

use regex::Regex;

static SEARCH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"search (?:for )?(.+)").expect("search pattern is a valid regex")
});

/// Pull the search term out of an utterance such as "search for laptops".
///
/// Unanchored, so "please search drills" yields "drills".
pub fn extract_search_term(transcript: &str) -> Option<&str> {
    SEARCH_PATTERN
        .captures(transcript)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|term| !term.is_empty())
}
