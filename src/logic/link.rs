// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Phone number normalization and WhatsApp deep-link construction.
//!
//! Responsibilities:
//! - Reduce arbitrary user text to the digits WhatsApp expects.
//! - Build the `api.whatsapp.com` chat link for those digits.
//! - Hand the link to the platform URL opener.

use thiserror::Error;
use url::Url;

/// Base of the chat deep link; the digits go into the `phone` query parameter.
pub const CHAT_LINK_BASE: &str = "https://api.whatsapp.com/send/";

/// Minimum number of digits before the button shows a `+<digits>` preview.
const PREVIEW_MIN_DIGITS: usize = 5;

/// Failures surfaced to the user as a single advisory message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinkError {
    /// No digits were left after normalization.
    #[error("no digits in phone number")]
    EmptyNumber,
    /// The platform refused to open the link or has no handler for it.
    #[error("failed to open link: {0}")]
    LaunchFailed(String),
}

/// Platform facility that opens a URL in its registered handler.
pub trait UrlOpener {
    fn open(&self, url: &Url) -> std::io::Result<()>;
}

/// Opens links through the desktop's default handler via the `open` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &Url) -> std::io::Result<()> {
        open::that(url.as_str())
    }
}

/// Keep only the ASCII decimal digits of `raw`, in order.
///
/// A leading `+`, separators, letters and any non-ASCII characters (including
/// digits from other scripts) are dropped. Never fails; idempotent.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize("+1 (123) 456-7890"), "11234567890");
/// assert_eq!(normalize("call me"), "");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Build the WhatsApp chat link for a cleaned number.
///
/// The input is normalized again so a caller passing raw text cannot smuggle
/// separators into the query string.
pub fn build_link(cleaned: &str) -> Result<Url, LinkError> {
    let digits = normalize(cleaned);
    if digits.is_empty() {
        return Err(LinkError::EmptyNumber);
    }

    // Constant absolute https URL; parsing it cannot fail.
    let mut url = Url::parse(CHAT_LINK_BASE).expect("chat link base must be a valid URL");
    url.set_query(Some(&format!("phone={digits}")));
    Ok(url)
}

/// Ask the platform to open `url`. One shot, no retry.
pub fn launch(url: &Url, opener: &dyn UrlOpener) -> Result<(), LinkError> {
    tracing::info!(host = url.host_str().unwrap_or_default(), "opening chat link");
    opener.open(url).map_err(|err| {
        tracing::warn!(error = %err, "platform rejected chat link");
        LinkError::LaunchFailed(err.to_string())
    })
}

/// `+<digits>` preview for the open button, once the number looks plausible.
pub fn display_number(cleaned: &str) -> Option<String> {
    (cleaned.len() >= PREVIEW_MIN_DIGITS).then(|| format!("+{cleaned}"))
}
