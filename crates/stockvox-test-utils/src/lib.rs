// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Stockvox.
//!
//! # Components
//!
//! - [`RecordingHost`] - `AssistantHost` that captures every side effect
//! - [`fixtures`] - inventory snapshots used across crates

pub mod fixtures;
pub mod recording_host;

pub use recording_host::{HostEvent, RecordingHost};
