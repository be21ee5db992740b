// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use url::Url;

use crate::logic::link::{self, LinkError, UrlOpener};
use crate::models::country_codes::apply_country_code;
use crate::ui::components::country_codes::{self, CountryCodesModel, CountryCodesMsg};
use crate::utils::ClipboardSource;

/// Advisory shown for every failed attempt to open a chat.
pub const OPEN_ERROR_MESSAGE: &str = "Unable to open WhatsApp. Make sure it's installed.";

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Raw text of the phone field, exactly as typed or pasted.
    pub phone_number: String,
    /// Set when the last submit failed; cleared on edit or success.
    pub show_error: bool,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Calling-code reference panel state.
    pub country_codes: CountryCodesModel,
}

impl AppModel {
    /// Start with a pre-filled phone field.
    pub fn with_phone_number(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            ..Default::default()
        }
    }

    /// Digits of the phone field; recomputed on every call.
    pub fn cleaned_number(&self) -> String {
        link::normalize(&self.phone_number)
    }
}

/// Application messages routed through the update function.
#[derive(Debug)]
pub enum Msg {
    PhoneNumberChanged(String),
    PasteRequested,
    ClipboardRead(Result<Option<String>, String>),
    OpenRequested,
    OpenCompleted(Result<(), LinkError>),
    CountryCodes(CountryCodesMsg),
}

/// Commands represent side-effects executed between frames.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    ReadClipboard,
    OpenChat(Url),
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::PhoneNumberChanged(text) => {
            model.phone_number = text;
            model.show_error = false;
        }
        Msg::PasteRequested => cmds.push(Command::ReadClipboard),
        Msg::ClipboardRead(result) => apply_clipboard(model, result),
        Msg::OpenRequested => match link::build_link(&model.cleaned_number()) {
            Ok(url) => cmds.push(Command::OpenChat(url)),
            Err(err) => surface_failure(model, &err),
        },
        Msg::OpenCompleted(Ok(())) => {
            model.show_error = false;
            let shown = format!("+{}", model.cleaned_number());
            model.status = Some(format!("Opened WhatsApp chat for {shown}."));
        }
        Msg::OpenCompleted(Err(err)) => surface_failure(model, &err),
        Msg::CountryCodes(m) => {
            if let Some(code) = country_codes::update(&mut model.country_codes, m) {
                model.phone_number = apply_country_code(&model.phone_number, code);
                model.show_error = false;
                model.status = Some(format!("Added country code +{code}."));
            }
        }
    }
}

/// Execute a command synchronously and return the resulting message.
pub fn run_command(
    cmd: Command,
    opener: &dyn UrlOpener,
    clipboard: &dyn ClipboardSource,
) -> Msg {
    match cmd {
        Command::ReadClipboard => {
            let result = clipboard.read_text().map_err(|err| format!("{err:#}"));
            if let Err(err) = &result {
                tracing::warn!(error = %err, "clipboard read failed");
            }
            Msg::ClipboardRead(result)
        }
        Command::OpenChat(url) => Msg::OpenCompleted(link::launch(&url, opener)),
    }
}

/// Replace the phone field with the digits of pasted text.
fn apply_clipboard(model: &mut AppModel, result: Result<Option<String>, String>) {
    match result {
        Ok(Some(text)) => {
            let digits = link::normalize(&text);
            if digits.is_empty() {
                model.status = Some("Clipboard does not contain a phone number.".into());
                return;
            }
            tracing::debug!(digits = %digits, "pasted number from clipboard");
            model.phone_number = digits;
            model.show_error = false;
            model.status = Some("Pasted number from clipboard.".into());
        }
        Ok(None) => model.status = Some("Clipboard is empty.".into()),
        Err(err) => model.status = Some(format!("Could not read clipboard: {err}")),
    }
}

/// Every failure kind surfaces as the same advisory, rendered from `show_error`.
fn surface_failure(model: &mut AppModel, err: &LinkError) {
    tracing::debug!(error = %err, "chat link not opened");
    model.show_error = true;
    model.status = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::link::tests::FakeOpener;

    struct FakeClipboard(anyhow::Result<Option<String>>);

    impl ClipboardSource for FakeClipboard {
        fn read_text(&self) -> anyhow::Result<Option<String>> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(err) => Err(anyhow::anyhow!("{err}")),
            }
        }
    }

    fn empty_clipboard() -> FakeClipboard {
        FakeClipboard(Ok(None))
    }

    /// Feed `msg` through update and run every resulting command to completion.
    fn dispatch(
        model: &mut AppModel,
        msg: Msg,
        opener: &dyn UrlOpener,
        clipboard: &dyn ClipboardSource,
    ) {
        let mut pending = vec![msg];
        while let Some(msg) = pending.pop() {
            let mut cmds = Vec::new();
            update(model, msg, &mut cmds);
            pending.extend(cmds.into_iter().map(|c| run_command(c, opener, clipboard)));
        }
    }

    #[test]
    fn open_request_enqueues_chat_link() {
        let mut model = AppModel::with_phone_number("+1 (555) 123-4567");
        let mut cmds = Vec::new();

        update(&mut model, Msg::OpenRequested, &mut cmds);

        assert_eq!(cmds.len(), 1, "open should enqueue command");
        match cmds.pop().unwrap() {
            Command::OpenChat(url) => assert_eq!(
                url.as_str(),
                "https://api.whatsapp.com/send/?phone=15551234567"
            ),
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(!model.show_error);
    }

    #[test]
    fn open_request_without_digits_sets_error() {
        let mut model = AppModel::with_phone_number("call me");
        let mut cmds = Vec::new();

        update(&mut model, Msg::OpenRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert!(model.show_error);
        assert_eq!(model.status, None, "advisory is shown once, from show_error");
    }

    #[test]
    fn successful_launch_clears_previous_error() {
        let opener = FakeOpener::default();
        let mut model = AppModel::with_phone_number("49 30 1234");
        model.show_error = true;

        dispatch(&mut model, Msg::OpenRequested, &opener, &empty_clipboard());

        assert!(!model.show_error);
        assert_eq!(opener.opened.borrow().len(), 1);
        assert!(
            model
                .status
                .as_deref()
                .map(|s| s.contains("+49301234"))
                .unwrap_or(false)
        );
    }

    #[test]
    fn failed_launch_sets_error() {
        let opener = FakeOpener {
            fail: true,
            ..Default::default()
        };
        let mut model = AppModel::with_phone_number("49 30 1234");

        dispatch(&mut model, Msg::OpenRequested, &opener, &empty_clipboard());

        assert!(model.show_error);
        assert_eq!(model.status, None);
    }

    // Editing after an error returns the form to idle.
    #[test]
    fn editing_clears_error() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(&mut model, Msg::OpenRequested, &mut cmds);
        assert!(model.show_error);

        update(&mut model, Msg::PhoneNumberChanged("4".into()), &mut cmds);
        assert!(!model.show_error);
        assert_ne!(model.status.as_deref(), Some(OPEN_ERROR_MESSAGE));
        assert_eq!(model.phone_number, "4");
        assert!(cmds.is_empty());
    }

    // A failed launch followed by an edit leaves no advisory anywhere.
    #[test]
    fn edit_after_failed_launch_returns_to_idle() {
        let opener = FakeOpener {
            fail: true,
            ..Default::default()
        };
        let mut model = AppModel::with_phone_number("49 30 1234");

        dispatch(&mut model, Msg::OpenRequested, &opener, &empty_clipboard());
        assert!(model.show_error);

        dispatch(
            &mut model,
            Msg::PhoneNumberChanged("49 30 12345".into()),
            &opener,
            &empty_clipboard(),
        );
        assert!(!model.show_error);
        assert_eq!(model.status, None);
    }

    #[test]
    fn paste_replaces_input_with_digits() {
        let clipboard = FakeClipboard(Ok(Some("Tel: +44 (20) 7946-0958".into())));
        let mut model = AppModel::with_phone_number("123");

        dispatch(&mut model, Msg::PasteRequested, &FakeOpener::default(), &clipboard);

        assert_eq!(model.phone_number, "442079460958");
        assert_eq!(model.status.as_deref(), Some("Pasted number from clipboard."));
    }

    #[test]
    fn paste_without_digits_keeps_input() {
        let clipboard = FakeClipboard(Ok(Some("no number here".into())));
        let mut model = AppModel::with_phone_number("123");

        dispatch(&mut model, Msg::PasteRequested, &FakeOpener::default(), &clipboard);

        assert_eq!(model.phone_number, "123");
        assert!(!model.show_error);
    }

    #[test]
    fn empty_clipboard_sets_status() {
        let mut model = AppModel::default();

        dispatch(
            &mut model,
            Msg::PasteRequested,
            &FakeOpener::default(),
            &empty_clipboard(),
        );

        assert_eq!(model.status.as_deref(), Some("Clipboard is empty."));
    }

    #[test]
    fn clipboard_failure_is_status_only() {
        let clipboard = FakeClipboard(Err(anyhow::anyhow!("no display")));
        let mut model = AppModel::default();

        dispatch(&mut model, Msg::PasteRequested, &FakeOpener::default(), &clipboard);

        assert!(!model.show_error);
        assert!(
            model
                .status
                .as_deref()
                .map(|s| s.contains("no display"))
                .unwrap_or(false)
        );
    }

    #[test]
    fn picking_country_code_prefixes_number() {
        let mut model = AppModel::with_phone_number("030 1234");
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::CountryCodes(CountryCodesMsg::Picked("49")),
            &mut cmds,
        );

        assert_eq!(model.phone_number, "49 30 1234");
        assert_eq!(model.cleaned_number(), "49301234");
        assert!(cmds.is_empty());
    }
}
