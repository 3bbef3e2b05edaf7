// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Page heading with a back link to the contact list.

use eframe::egui;

/// Draw a "Back" link above `title`. Returns `true` when the link was clicked.
pub fn page_header(ui: &mut egui::Ui, title: &str) -> bool {
    let back = ui
        .add(
            egui::Button::new(format!("{} Back", egui_phosphor::regular::ARROW_LEFT))
                .frame(false),
        )
        .on_hover_text("Return to the contact list")
        .clicked();
    ui.add_space(4.0);
    ui.heading(title);
    back
}
