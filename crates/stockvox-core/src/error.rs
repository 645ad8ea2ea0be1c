// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for Stockvox.

use thiserror::Error;

/// The primary error type used across Stockvox crates.
#[derive(Debug, Error)]
pub enum StockvoxError {
    /// Configuration errors (invalid TOML, out-of-range rates, bad limits).
    #[error("configuration error: {0}")]
    Config(String),

    /// File system errors while reading inventory or document inputs.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Malformed JSON input (inventory snapshots, invoice requests).
    #[error("parse error: {message}")]
    Parse {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A bound command action failed while handling an utterance.
    #[error("command `{trigger}` failed: {message}")]
    Command { trigger: String, message: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl StockvoxError {
    /// Shorthand for a failed command action.
    pub fn command(trigger: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Command {
            trigger: trigger.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for StockvoxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
