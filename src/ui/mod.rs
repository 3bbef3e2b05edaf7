// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for browsing and registering contacts.
//! Handles layout, page switching, and wiring to the background workers.

pub mod components;

use std::sync::Arc;

use eframe::egui;

use crate::mvu::{self, AppModel, Command, Msg, Page};
use crate::services::ContactsBackend;
use crate::ui::components::{contact_form, contact_list, page_header};

/// Worker threads executing network commands.
const WORKER_THREADS: usize = 2;

/// Stateful egui application for the contacts client.
pub struct ContactsApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl ContactsApp {
    /// Spawn the worker pool around `backend` and mount the home page.
    ///
    /// `ctx` is woken whenever a worker finishes so results show up without
    /// waiting for user input.
    pub fn new(backend: Arc<dyn ContactsBackend>, ctx: egui::Context) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        for worker in 0..WORKER_THREADS {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let backend = Arc::clone(&backend);
            let ctx = ctx.clone();
            std::thread::spawn(move || {
                tracing::debug!(worker, "command worker started");
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd, backend.as_ref());
                    if msg_tx.send(msg).is_err() {
                        break;
                    }
                    ctx.request_repaint();
                }
            });
        }

        Self {
            model: AppModel::default(),
            inbox: vec![Msg::Navigate(Page::Home)],
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for ContactsApp {
    /// Drives a single UI frame: applies worker results and queued messages to
    /// the model, dispatches resulting commands, then renders the header,
    /// error modal, status bar, and the active page.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(format!("{} MyContacts", egui_phosphor::regular::ADDRESS_BOOK));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            egui::ScrollArea::vertical().show(ui, |ui| match self.model.page {
                Page::Home => self.render_home(ui),
                Page::NewContact => self.render_new_contact(ui),
            });
        });
    }

    // Required by eframe 0.34; all rendering happens in `update`, which eframe
    // still calls every frame before `ui`.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}
}

impl ContactsApp {
    /// Count header, "New contact" button and the contact list.
    fn render_home(&mut self, ui: &mut egui::Ui) {
        let list = &self.model.contacts;
        ui.horizontal(|ui| {
            if !list.has_error() && !list.contacts().is_empty() {
                ui.label(
                    egui::RichText::new(contact_list::count_label(list.filtered_contacts().len()))
                        .strong(),
                );
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(format!("{} New contact", egui_phosphor::regular::USER_PLUS))
                    .clicked()
                {
                    self.inbox.push(Msg::Navigate(Page::NewContact));
                }
            });
        });
        ui.add_space(12.0);

        let msgs = contact_list::view(ui, &self.model.contacts);
        self.inbox.extend(msgs.into_iter().map(Msg::ContactList));
    }

    /// Registration form under a page header with a back link.
    fn render_new_contact(&mut self, ui: &mut egui::Ui) {
        if page_header(ui, "New contact") {
            self.inbox.push(Msg::Navigate(Page::Home));
        }
        ui.add_space(12.0);

        let msgs = contact_form::view(ui, &self.model.form, "Register");
        self.inbox.extend(msgs.into_iter().map(Msg::ContactForm));
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Something went wrong")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status/error message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some(text) = &self.model.status {
                ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
            }
            if self.model.pending_commands > 0 {
                ui.add(egui::Spinner::new().size(14.0)).on_hover_text(format!(
                    "{} request(s) in flight",
                    self.model.pending_commands
                ));
            }
        });
    }
}
