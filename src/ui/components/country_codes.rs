// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Calling-code reference panel in an MVU-friendly shape.

use eframe::egui;

use crate::models::country_codes::{self, CountryCode};

/// UI model for the reference panel, kept free of side effects.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct CountryCodesModel {
    open: bool,
    filter: String,
}

/// Messages emitted by the reference panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CountryCodesMsg {
    Toggle,
    FilterChanged(String),
    Picked(&'static str),
}

impl CountryCodesModel {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }
}

/// Apply a message to the model. Returns the picked calling code, if any.
pub fn update(model: &mut CountryCodesModel, msg: CountryCodesMsg) -> Option<&'static str> {
    match msg {
        CountryCodesMsg::Toggle => {
            model.open = !model.open;
            if !model.is_open() {
                model.filter.clear();
            }
            None
        }
        CountryCodesMsg::FilterChanged(text) => {
            model.filter = text;
            None
        }
        CountryCodesMsg::Picked(code) => {
            model.open = false;
            model.filter.clear();
            Some(code)
        }
    }
}

/// Render the "Include country code" link and, when open, the reference list.
pub fn view(ui: &mut egui::Ui, model: &CountryCodesModel) -> Vec<CountryCodesMsg> {
    let mut msgs = Vec::new();

    let caret = if model.is_open() {
        egui_phosphor::regular::CARET_DOWN
    } else {
        egui_phosphor::regular::CARET_RIGHT
    };
    if ui
        .link(egui::RichText::new(format!("Include country code {caret}")).small())
        .on_hover_text("Show calling codes")
        .clicked()
    {
        msgs.push(CountryCodesMsg::Toggle);
    }

    if !model.is_open() {
        return msgs;
    }

    ui.add_space(4.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        let mut filter = model.filter().to_string();
        if ui
            .add(
                egui::TextEdit::singleline(&mut filter)
                    .hint_text(format!(
                        "{} Country or code",
                        egui_phosphor::regular::MAGNIFYING_GLASS
                    ))
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            msgs.push(CountryCodesMsg::FilterChanged(filter));
        }

        ui.add_space(4.0);
        let matches = country_codes::search(model.filter());
        egui::ScrollArea::vertical()
            .max_height(160.0)
            .show(ui, |ui| {
                if matches.is_empty() {
                    ui.label(
                        egui::RichText::new("No matching country.")
                            .italics()
                            .color(egui::Color32::from_gray(110)),
                    );
                }
                egui::Grid::new("country_codes_grid")
                    .num_columns(2)
                    .striped(true)
                    .spacing(egui::vec2(12.0, 4.0))
                    .show(ui, |ui| {
                        for entry in matches {
                            render_row(ui, entry, &mut msgs);
                        }
                    });
            });
    });

    msgs
}

fn render_row(ui: &mut egui::Ui, entry: &'static CountryCode, msgs: &mut Vec<CountryCodesMsg>) {
    let label = format!("{} ({})", entry.name, entry.iso);
    if ui
        .add(egui::Button::new(label).frame(false))
        .on_hover_text("Use this country code")
        .clicked()
    {
        msgs.push(CountryCodesMsg::Picked(entry.code));
    }
    ui.label(egui::RichText::new(format!("+{}", entry.code)).monospace());
    ui.end_row();
}
