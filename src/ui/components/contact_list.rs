// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Contact list with client-side search and server-side ordering.

use eframe::egui;

use crate::models::contact::{Contact, OrderBy};

/// UI model for the contact list, kept free of side effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactListModel {
    contacts: Vec<Contact>,
    order_by: OrderBy,
    search_term: String,
    is_loading: bool,
    has_error: bool,
}

/// Messages emitted by the list view or routed back from commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactListMsg {
    Mounted,
    ToggleOrder,
    SearchChanged(String),
    TryAgain,
    ContactsLoaded {
        order_by: OrderBy,
        contacts: Vec<Contact>,
    },
    LoadFailed {
        order_by: OrderBy,
        message: String,
    },
}

/// Side effects requested by the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactListCommand {
    LoadContacts(OrderBy),
}

/// The single state rendered in place of, or as, the list body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListDisplay {
    Loading,
    Error,
    /// The server holds no contacts at all.
    Empty,
    /// Contacts exist but none match the search term.
    NoResults,
    Populated,
}

impl ContactListModel {
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn order_by(&self) -> OrderBy {
        self.order_by
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// Contacts whose name contains the search term, ignoring case.
    pub fn filtered_contacts(&self) -> Vec<&Contact> {
        let needle = self.search_term.to_lowercase();
        self.contacts
            .iter()
            .filter(|contact| contact.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Pick the one state to render. Loading wins over error, error over the
    /// empty/no-results distinction.
    pub fn display(&self) -> ListDisplay {
        if self.is_loading() {
            ListDisplay::Loading
        } else if self.has_error() {
            ListDisplay::Error
        } else if self.contacts.is_empty() {
            ListDisplay::Empty
        } else if self.filtered_contacts().is_empty() {
            ListDisplay::NoResults
        } else {
            ListDisplay::Populated
        }
    }

    pub fn no_results_message(&self) -> String {
        format!("No results were found for \"{}\".", self.search_term)
    }

    fn start_loading(&mut self, cmds: &mut Vec<ContactListCommand>) {
        self.is_loading = true;
        cmds.push(ContactListCommand::LoadContacts(self.order_by));
    }
}

/// "1 contact" / "N contacts".
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 contact".to_string()
    } else {
        format!("{count} contacts")
    }
}

/// Apply a message to the list model, queueing side effects into `cmds`.
pub fn update(
    model: &mut ContactListModel,
    msg: ContactListMsg,
    cmds: &mut Vec<ContactListCommand>,
) {
    match msg {
        ContactListMsg::Mounted | ContactListMsg::TryAgain => model.start_loading(cmds),
        ContactListMsg::ToggleOrder => {
            model.order_by = model.order_by.toggled();
            model.start_loading(cmds);
        }
        ContactListMsg::SearchChanged(term) => model.search_term = term,
        ContactListMsg::ContactsLoaded { order_by, contacts } => {
            if order_by != model.order_by {
                tracing::debug!(?order_by, "dropping stale contact listing");
                return;
            }
            model.contacts = contacts;
            model.has_error = false;
            model.is_loading = false;
        }
        ContactListMsg::LoadFailed { order_by, message } => {
            if order_by != model.order_by {
                return;
            }
            tracing::warn!(%message, "failed to load contacts");
            model.has_error = true;
            model.is_loading = false;
        }
    }
}

/// Render the list body and return messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &ContactListModel) -> Vec<ContactListMsg> {
    let mut msgs = Vec::new();

    if !model.contacts.is_empty() {
        let mut term = model.search_term().to_string();
        let resp = ui.add(
            egui::TextEdit::singleline(&mut term)
                .hint_text(format!(
                    "{} Search by name...",
                    egui_phosphor::regular::MAGNIFYING_GLASS
                ))
                .desired_width(f32::INFINITY),
        );
        if resp.changed() {
            msgs.push(ContactListMsg::SearchChanged(term));
        }
        ui.add_space(12.0);
    }

    match model.display() {
        ListDisplay::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.add(egui::Spinner::new().size(32.0));
            });
        }
        ListDisplay::Error => render_error_banner(ui, &mut msgs),
        ListDisplay::Empty => {
            render_placeholder(
                ui,
                egui_phosphor::regular::PACKAGE,
                "You don't have any contacts registered yet! \
                 Click the New contact button above to register your first one!",
            );
        }
        ListDisplay::NoResults => {
            render_placeholder(
                ui,
                egui_phosphor::regular::MAGNIFYING_GLASS,
                &model.no_results_message(),
            );
        }
        ListDisplay::Populated => render_contacts(ui, model, &mut msgs),
    }

    msgs
}

/// Fetch failure banner with a retry action.
fn render_error_banner(ui: &mut egui::Ui, msgs: &mut Vec<ContactListMsg>) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(egui_phosphor::regular::SMILEY_SAD).size(40.0));
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new("An error occurred while retrieving your contacts!")
                    .strong()
                    .color(ui.visuals().error_fg_color),
            );
            if ui
                .button(format!("{} Try again", egui_phosphor::regular::ARROW_CLOCKWISE))
                .clicked()
            {
                msgs.push(ContactListMsg::TryAgain);
            }
        });
    });
}

fn render_placeholder(ui: &mut egui::Ui, icon: &str, text: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.label(
            egui::RichText::new(icon)
                .size(48.0)
                .color(egui::Color32::from_gray(140)),
        );
        ui.add_space(8.0);
        ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(110)));
    });
}

/// Order toggle header followed by one card per filtered contact.
fn render_contacts(ui: &mut egui::Ui, model: &ContactListModel, msgs: &mut Vec<ContactListMsg>) {
    let arrow = match model.order_by() {
        OrderBy::Asc => egui_phosphor::regular::ARROW_UP,
        OrderBy::Desc => egui_phosphor::regular::ARROW_DOWN,
    };
    if ui
        .add(egui::Button::new(format!("Name {arrow}")).frame(false))
        .on_hover_text("Toggle sort order")
        .clicked()
    {
        msgs.push(ContactListMsg::ToggleOrder);
    }
    ui.add_space(6.0);

    for contact in model.filtered_contacts() {
        ui.push_id(contact.id.as_str(), |ui| render_card(ui, contact));
        ui.add_space(6.0);
    }
}

fn render_card(ui: &mut egui::Ui, contact: &Contact) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&contact.name).strong());
            if let Some(category) = contact.category_name.as_deref() {
                ui.label(
                    egui::RichText::new(category)
                        .small()
                        .background_color(ui.visuals().selection.bg_fill),
                );
            }
        });
        if let Some(email) = contact.email.as_deref().filter(|e| !e.is_empty()) {
            ui.label(
                egui::RichText::new(format!("{} {email}", egui_phosphor::regular::ENVELOPE_SIMPLE))
                    .color(egui::Color32::from_gray(110)),
            );
        }
        if let Some(phone) = contact.phone.as_deref().filter(|p| !p.is_empty()) {
            ui.label(
                egui::RichText::new(format!("{} {phone}", egui_phosphor::regular::PHONE))
                    .color(egui::Color32::from_gray(110)),
            );
        }
    });
}
