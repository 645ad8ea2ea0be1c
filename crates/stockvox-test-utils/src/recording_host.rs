// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host double that records calls for assertions.

use stockvox_core::{AssistantHost, InventoryStats, Route};

/// One captured host call.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Spoke(String),
    Navigated(Route),
    Searched(String),
    Reloaded,
    WentBack,
    StoppedListening,
}

/// Captures every call made through [`AssistantHost`], in order.
#[derive(Debug, Default)]
pub struct RecordingHost {
    events: Vec<HostEvent>,
    stats: Option<InventoryStats>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `inventory_stats()` with `stats`.
    pub fn with_stats(mut self, stats: InventoryStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    pub fn spoken(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Spoke(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Navigated(route) => Some(*route),
                _ => None,
            })
            .collect()
    }

    pub fn searches(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Searched(term) => Some(term.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn reloads(&self) -> usize {
        self.count(&HostEvent::Reloaded)
    }

    pub fn back_requests(&self) -> usize {
        self.count(&HostEvent::WentBack)
    }

    pub fn stop_requests(&self) -> usize {
        self.count(&HostEvent::StoppedListening)
    }

    fn count(&self, event: &HostEvent) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }
}

impl AssistantHost for RecordingHost {
    fn speak(&mut self, text: &str) {
        self.events.push(HostEvent::Spoke(text.to_string()));
    }

    fn navigate(&mut self, route: Route) {
        self.events.push(HostEvent::Navigated(route));
    }

    fn search(&mut self, term: &str) {
        self.events.push(HostEvent::Searched(term.to_string()));
    }

    fn reload(&mut self) {
        self.events.push(HostEvent::Reloaded);
    }

    fn go_back(&mut self) {
        self.events.push(HostEvent::WentBack);
    }

    fn stop_listening(&mut self) {
        self.events.push(HostEvent::StoppedListening);
    }

    fn inventory_stats(&self) -> Option<InventoryStats> {
        self.stats.clone()
    }
}
