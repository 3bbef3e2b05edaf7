//! Application entry point wiring egui/eframe to launch the contacts UI.

use std::sync::Arc;

use eframe::egui;
use egui_phosphor::Variant;

use crate::config::AppConfig;
use crate::services::{ContactsService, HttpClient};
use crate::ui::ContactsApp;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run(config: AppConfig) -> eframe::Result<()> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let backend = Arc::new(ContactsService::new(HttpClient::new(&config.api_base_url)));
    tracing::info!(api = %config.api_base_url, "starting contacts client");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 760.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "MyContacts",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(ContactsApp::new(backend, cc.egui_ctx.clone())))
        }),
    )
}
