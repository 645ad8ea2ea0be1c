// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trigger-phrase command interpretation for the Stockvox assistant.
//!
//! This crate provides:
//! - [`CommandInterpreter`]: first-match-wins dispatch with search extraction
//!   and word-overlap suggestions
//! - [`ConversationHistory`]: append-only log with a bounded read window
//! - [`builtin::register_builtins`]: the stock navigation, data, and
//!   conversational command set

pub mod builtin;
pub mod context;
pub mod history;
pub mod interpreter;
pub mod search;
pub mod trigger;

pub use context::ActionContext;
pub use history::ConversationHistory;
pub use interpreter::{CommandInterpreter, CommandOutcome, RecognitionError};
pub use search::extract_search_term;
pub use trigger::{CommandAction, IntoTriggers, TriggerTable};
