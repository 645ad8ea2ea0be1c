// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for the seams between Stockvox and its host application.

pub mod host;

pub use host::AssistantHost;
