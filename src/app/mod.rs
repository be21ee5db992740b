// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring egui/eframe to launch the WhatsApp Link UI.

use anyhow::anyhow;
use eframe::egui;
use egui_phosphor::Variant;

use crate::mvu::AppModel;
use crate::ui::WaLinkApp;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run(model: AppModel) -> anyhow::Result<()> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([500.0, 220.0])
            .with_min_inner_size([420.0, 180.0]),
        ..Default::default()
    };

    tracing::info!("starting UI");
    eframe::run_native(
        "WhatsApp Link",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(WaLinkApp::new(model)))
        }),
    )
    .map_err(|err| anyhow!("UI event loop failed: {err}"))
}
