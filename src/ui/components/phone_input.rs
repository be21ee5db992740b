// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Phone number field with paste button.

use eframe::egui;

use crate::mvu::Msg;

const PLACEHOLDER: &str = "1-123-456-7890";

/// Render the `+` prefix, the number field and the paste button.
///
/// Pressing Enter inside the field requests opening the chat.
pub fn view(ui: &mut egui::Ui, phone_number: &str) -> Vec<Msg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("+").strong());

        let paste_width = ui.spacing().interact_size.x + ui.spacing().item_spacing.x;
        let mut text = phone_number.to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .hint_text(PLACEHOLDER)
                .desired_width((ui.available_width() - paste_width).max(120.0)),
        );
        if response.changed() {
            msgs.push(Msg::PhoneNumberChanged(text));
        }
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            msgs.push(Msg::OpenRequested);
        }

        if ui
            .button(egui_phosphor::regular::CLIPBOARD_TEXT)
            .on_hover_text("Paste number from clipboard")
            .clicked()
        {
            msgs.push(Msg::PasteRequested);
        }
    });

    msgs
}
