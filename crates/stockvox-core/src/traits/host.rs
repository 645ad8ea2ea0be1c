// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host trait for the side effects command actions trigger.

use crate::types::{InventoryStats, Route};

/// Side effects available to command actions.
///
/// The host application owns speech output, page routing, and search
/// dispatch. Every method is fire-and-forget from the interpreter's view.
pub trait AssistantHost {
    /// Speak (or display) a response to the user.
    fn speak(&mut self, text: &str);

    /// Navigate to a page.
    fn navigate(&mut self, route: Route);

    /// Dispatch a search for `term` to whichever view is listening.
    fn search(&mut self, term: &str);

    /// Reload the current page.
    fn reload(&mut self);

    /// Go back one page in history.
    fn go_back(&mut self);

    /// Stop speech capture.
    fn stop_listening(&mut self);

    /// Current inventory numbers, if the host can provide them.
    fn inventory_stats(&self) -> Option<InventoryStats>;
}
