// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by UI and business logic.

pub mod clipboard;

/// Read text from the system clipboard.
pub use clipboard::{ClipboardSource, SystemClipboard};
