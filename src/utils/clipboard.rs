// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Read-only access to the system text clipboard.

use anyhow::{Context, Result};

/// Source of pasted text.
pub trait ClipboardSource {
    /// Current clipboard text; `None` when the clipboard is empty or holds no text.
    fn read_text(&self) -> Result<Option<String>>;
}

/// System clipboard backed by `arboard`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSource for SystemClipboard {
    fn read_text(&self) -> Result<Option<String>> {
        let mut clipboard = arboard::Clipboard::new().context("Clipboard unavailable")?;
        match clipboard.get_text() {
            Ok(text) if text.is_empty() => Ok(None),
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(err) => Err(err).context("Failed to read clipboard"),
        }
    }
}
