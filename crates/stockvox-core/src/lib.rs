// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Stockvox.
//!
//! Provides the error type, the inventory and conversation types, and the
//! [`AssistantHost`] trait shared by the command interpreter and the
//! financial calculator.

pub mod error;
pub mod traits;
pub mod types;

pub use error::StockvoxError;
pub use traits::AssistantHost;
pub use types::{
    ConversationEntry, FreshnessStatus, InventoryItem, InventoryStats, Role, Route, UNCATEGORIZED,
};
