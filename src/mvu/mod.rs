// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring page state, messages, and commands.

use crate::models::contact::{Contact, NewContact, OrderBy};
use crate::services::ContactsBackend;
use crate::ui::components::contact_form::{
    self, ContactFormCommand, ContactFormModel, ContactFormMsg,
};
use crate::ui::components::contact_list::{
    self, ContactListCommand, ContactListModel, ContactListMsg,
};

/// Which screen is shown in the central panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    NewContact,
}

/// Top-level application state.
#[derive(Debug, Default)]
pub struct AppModel {
    /// Currently visible page.
    pub page: Page,
    /// Contact list shown on the home page.
    pub contacts: ContactListModel,
    /// Registration form shown on the new-contact page.
    pub form: ContactFormModel,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
    /// Bumped every time the form is mounted; tags submissions so results
    /// from an earlier mount never touch the current form.
    pub form_mount: u64,
}

/// Application messages routed through the update function.
#[derive(Debug)]
pub enum Msg {
    Navigate(Page),
    ContactCreated {
        mount: u64,
        result: Result<Option<Contact>, String>,
    },
    DismissError,
    ContactList(ContactListMsg),
    ContactForm(ContactFormMsg),
}

/// Commands represent side-effects executed off the UI thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    LoadContacts(OrderBy),
    LoadCategories,
    CreateContact { mount: u64, contact: NewContact },
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Navigate(page) => navigate(model, page, cmds),
        Msg::DismissError => model.error = None,
        Msg::ContactList(m) => forward_list(model, m, cmds),
        Msg::ContactForm(m) => forward_form(model, m, cmds),
        Msg::ContactCreated { mount, result } => {
            let current = mount == model.form_mount;
            if current {
                let succeeded = result.is_ok();
                forward_form(model, ContactFormMsg::SubmitFinished { succeeded }, cmds);
            } else {
                tracing::debug!(mount, current = model.form_mount, "result from an earlier form");
            }
            match result {
                Ok(created) => {
                    tracing::info!(id = ?created.as_ref().map(|c| &c.id), "contact registered");
                    if current {
                        forward_form(model, ContactFormMsg::Reset, cmds);
                    }
                    surface_event(model, "Contact registered with success!".to_string(), false);
                }
                Err(err) => {
                    tracing::error!(error = %err, "contact registration failed");
                    surface_event(
                        model,
                        format!("An error occurred while registering the contact.\n\n{err}"),
                        true,
                    );
                }
            }
        }
    }
}

/// Switch pages, mounting the target page's component.
fn navigate(model: &mut AppModel, page: Page, cmds: &mut Vec<Command>) {
    model.page = page;
    match page {
        Page::Home => forward_list(model, ContactListMsg::Mounted, cmds),
        Page::NewContact => {
            model.form = ContactFormModel::default();
            model.form_mount += 1;
            forward_form(model, ContactFormMsg::Mounted, cmds);
        }
    }
}

fn forward_list(model: &mut AppModel, msg: ContactListMsg, cmds: &mut Vec<Command>) {
    let mut list_cmds = Vec::new();
    contact_list::update(&mut model.contacts, msg, &mut list_cmds);
    for c in list_cmds {
        match c {
            ContactListCommand::LoadContacts(order_by) => {
                cmds.push(Command::LoadContacts(order_by));
            }
        }
    }
}

fn forward_form(model: &mut AppModel, msg: ContactFormMsg, cmds: &mut Vec<Command>) {
    let mut form_cmds = Vec::new();
    contact_form::update(&mut model.form, msg, &mut form_cmds);
    for c in form_cmds {
        match c {
            ContactFormCommand::LoadCategories => cmds.push(Command::LoadCategories),
            ContactFormCommand::Submit(contact) => cmds.push(Command::CreateContact {
                mount: model.form_mount,
                contact,
            }),
        }
    }
}

/// Execute a command against the backend and return the resulting message.
pub fn run_command(cmd: Command, backend: &dyn ContactsBackend) -> Msg {
    match cmd {
        Command::LoadContacts(order_by) => match backend.list_contacts(order_by) {
            Ok(contacts) => {
                tracing::debug!(count = contacts.len(), ?order_by, "contacts loaded");
                Msg::ContactList(ContactListMsg::ContactsLoaded { order_by, contacts })
            }
            Err(err) => {
                tracing::debug!(status = ?err.status(), ?order_by, "contact listing failed");
                Msg::ContactList(ContactListMsg::LoadFailed {
                    order_by,
                    message: err.to_string(),
                })
            }
        },
        Command::LoadCategories => match backend.list_categories() {
            Ok(categories) => Msg::ContactForm(ContactFormMsg::CategoriesLoaded(categories)),
            Err(err) => Msg::ContactForm(ContactFormMsg::CategoriesUnavailable(err.to_string())),
        },
        Command::CreateContact { mount, contact } => Msg::ContactCreated {
            mount,
            result: backend.create_contact(&contact).map_err(|e| e.to_string()),
        },
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}
