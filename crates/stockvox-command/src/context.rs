// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-invocation view handed to command actions.

use stockvox_core::{AssistantHost, InventoryStats, Route};

/// Wraps the host for one action call and records what the action says.
pub struct ActionContext<'a> {
    transcript: &'a str,
    host: &'a mut dyn AssistantHost,
    spoken: Vec<String>,
    stop_requested: bool,
}

impl<'a> ActionContext<'a> {
    pub fn new(transcript: &'a str, host: &'a mut dyn AssistantHost) -> Self {
        Self {
            transcript,
            host,
            spoken: Vec::new(),
            stop_requested: false,
        }
    }

    /// The normalized utterance that fired this action.
    pub fn transcript(&self) -> &str {
        self.transcript
    }

    pub fn speak(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.host.speak(&text);
        self.spoken.push(text);
    }

    pub fn navigate(&mut self, route: Route) {
        self.host.navigate(route);
    }

    pub fn search(&mut self, term: &str) {
        self.host.search(term);
    }

    pub fn reload(&mut self) {
        self.host.reload();
    }

    pub fn go_back(&mut self) {
        self.host.go_back();
    }

    pub fn stop_listening(&mut self) {
        self.stop_requested = true;
        self.host.stop_listening();
    }

    pub fn inventory_stats(&self) -> Option<InventoryStats> {
        self.host.inventory_stats()
    }

    /// Consume the context, yielding everything spoken and whether capture
    /// should stop.
    pub(crate) fn finish(self) -> (Vec<String>, bool) {
        (self.spoken, self.stop_requested)
    }
}
