// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for opening a WhatsApp chat.
//! Handles layout, form controls, and wiring to the link launcher.

pub mod components;

use std::collections::VecDeque;

use eframe::egui;

use crate::logic::link::{self, SystemOpener, UrlOpener};
use crate::mvu::{self, AppModel, Msg, OPEN_ERROR_MESSAGE};
use crate::ui::components::{country_codes, phone_input};
use crate::utils::{ClipboardSource, SystemClipboard};

/// Stateful egui application holding the single phone-number form.
pub struct WaLinkApp {
    model: AppModel,
    inbox: Vec<Msg>,
    opener: Box<dyn UrlOpener>,
    clipboard: Box<dyn ClipboardSource>,
}

impl Default for WaLinkApp {
    fn default() -> Self {
        Self::new(AppModel::default())
    }
}

impl WaLinkApp {
    /// Build the app around an initial model, using the system opener and clipboard.
    pub fn new(model: AppModel) -> Self {
        Self {
            model,
            inbox: Vec::new(),
            opener: Box::new(SystemOpener),
            clipboard: Box::new(SystemClipboard),
        }
    }
}

impl eframe::App for WaLinkApp {
    /// Required by eframe 0.34; rendering happens in [`Self::update`], which the
    /// runtime still calls right before this each frame.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    /// Drives a single UI frame: applies queued messages, runs the commands they
    /// produce, then renders the top bar, status bar and the form.
    ///
    /// Commands run inline; each one yields a message that is processed in the
    /// same frame, so the view always reflects the outcome of the last click.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Process pending messages in arrival order until exhausted.
        let mut msgs: VecDeque<Msg> = std::mem::take(&mut self.inbox).into();
        while let Some(msg) = msgs.pop_front() {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                tracing::debug!(?cmd, "running command");
                msgs.push_back(mvu::run_command(
                    cmd,
                    self.opener.as_ref(),
                    self.clipboard.as_ref(),
                ));
            }
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("WhatsApp Link");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_controls(ui);
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.label(
                    egui::RichText::new("Enter a phone number to start a WhatsApp chat").strong(),
                );
                ui.add_space(4.0);

                let input_msgs = phone_input::view(ui, &self.model.phone_number);
                self.inbox.extend(input_msgs);

                let cc_msgs = country_codes::view(ui, &self.model.country_codes);
                self.inbox.extend(cc_msgs.into_iter().map(Msg::CountryCodes));
                ui.add_space(12.0);

                self.render_open_button(ui);

                if self.model.show_error {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(format!(
                            "{} {}",
                            egui_phosphor::regular::WARNING,
                            OPEN_ERROR_MESSAGE
                        ))
                        .small()
                        .color(ui.visuals().error_fg_color),
                    );
                }
            });
        });

        if !self.inbox.is_empty() {
            ctx.request_repaint();
        }
    }
}

impl WaLinkApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_theme_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(2.0);
        egui::widgets::global_theme_preference_switch(ui);
    }

    /// Render the "Open WhatsApp" button with a `+<digits>` preview.
    ///
    /// Disabled until the field contains at least one digit.
    fn render_open_button(&mut self, ui: &mut egui::Ui) {
        let cleaned = self.model.cleaned_number();
        let enabled = !cleaned.is_empty();

        let mut text = format!("{} Open WhatsApp", egui_phosphor::regular::WHATSAPP_LOGO);
        if let Some(preview) = link::display_number(&cleaned) {
            text.push_str(&format!("  {preview}"));
        }
        let button = egui::Button::new(
            egui::RichText::new(text)
                .size(16.0)
                .color(egui::Color32::WHITE),
        )
        .fill(egui::Color32::from_rgb(37, 211, 102))
        .min_size(egui::vec2(ui.available_width(), 40.0));

        if ui
            .add_enabled(enabled, button)
            .on_disabled_hover_text("Please enter a phone number")
            .clicked()
        {
            self.inbox.push(Msg::OpenRequested);
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(110)));
        }
    }
}
