// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered trigger table.
//!
//! Phrases are kept in registration order and matched first-wins. A phrase
//! registered twice keeps its first slot and takes the newer action.

use std::sync::Arc;

use stockvox_core::StockvoxError;

use crate::context::ActionContext;

/// A bound command action. Several phrases may share one action.
pub type CommandAction =
    Arc<dyn Fn(&mut ActionContext<'_>) -> Result<(), StockvoxError> + Send + Sync>;

/// Anything that can be registered as one or more trigger phrases.
pub trait IntoTriggers {
    fn into_triggers(self) -> Vec<String>;
}

impl IntoTriggers for &str {
    fn into_triggers(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoTriggers for String {
    fn into_triggers(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoTriggers for &[&str] {
    fn into_triggers(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> IntoTriggers for [&str; N] {
    fn into_triggers(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl IntoTriggers for Vec<String> {
    fn into_triggers(self) -> Vec<String> {
        self
    }
}

/// Normalize a phrase or transcript for matching.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Registered phrases and their actions, in insertion order.
#[derive(Default)]
pub struct TriggerTable {
    entries: Vec<(String, CommandAction)>,
}

impl TriggerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `phrase` to `action`. Returns `false` for blank phrases, which
    /// would otherwise match every transcript.
    pub fn insert(&mut self, phrase: &str, action: CommandAction) -> bool {
        let key = normalize(phrase);
        if key.is_empty() {
            return false;
        }
        match self.entries.iter_mut().find(|(t, _)| *t == key) {
            Some(slot) => slot.1 = action,
            None => self.entries.push((key, action)),
        }
        true
    }

    /// Phrases whose text equals or is contained in `transcript`, in order.
    ///
    /// Containment is plain substring search, so "items" also fires inside
    /// "add new items".
    pub fn matching<'a>(
        &'a self,
        transcript: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a CommandAction)> + 'a {
        self.entries
            .iter()
            .filter(move |(t, _)| transcript == t.as_str() || transcript.contains(t.as_str()))
            .map(|(t, a)| (t.as_str(), a))
    }

    /// Up to `limit` phrases sharing at least one word with `transcript`.
    pub fn suggestions(&self, transcript: &str, limit: usize) -> Vec<String> {
        let words: Vec<&str> = transcript.split_whitespace().collect();
        self.entries
            .iter()
            .filter(|(t, _)| t.split_whitespace().any(|tw| words.contains(&tw)))
            .map(|(t, _)| t.clone())
            .take(limit)
            .collect()
    }

    /// All phrases in registration order.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(t, _)| t.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
