// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Contact creation form in MVU shape: field state, inline validation,
//! category lookup and the submit guard.

use eframe::egui;

use crate::models::contact::{Category, NewContact, RecordId};
use crate::models::field_errors::{FieldErrors, FormField};
use crate::utils::{format_phone, is_email_valid};

/// Widest formatted phone string, `(NN) NNNNN-NNNN`.
const PHONE_CHAR_LIMIT: usize = 15;

/// Load status of the category selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoriesState {
    #[default]
    Loading,
    Loaded,
    /// Loading failed. The selector just stays empty; nothing is shown to the user.
    Unavailable,
}

/// Coarse form lifecycle derived from the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    /// Nothing typed since mount or the last reset.
    Idle,
    Valid,
    Invalid,
    Submitting,
    /// The last submission failed and nothing was edited since.
    Failed,
}

/// UI model for the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormModel {
    name: String,
    email: String,
    phone: String,
    category_id: Option<RecordId>,
    categories: Vec<Category>,
    categories_state: CategoriesState,
    is_submitting: bool,
    edited: bool,
    last_submit_failed: bool,
    errors: FieldErrors,
}

/// Messages emitted by the form view or routed back from commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactFormMsg {
    Mounted,
    CategoriesLoaded(Vec<Category>),
    CategoriesUnavailable(String),
    NameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    CategorySelected(Option<RecordId>),
    Submit,
    SubmitFinished { succeeded: bool },
    /// Clear the fields after a successful registration; categories are kept.
    Reset,
}

/// Side effects requested by the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactFormCommand {
    LoadCategories,
    Submit(NewContact),
}

impl ContactFormModel {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn category_id(&self) -> Option<&RecordId> {
        self.category_id.as_ref()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn categories_state(&self) -> CategoriesState {
        self.categories_state
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Name present and no outstanding field errors.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.errors.errors().is_empty()
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.is_submitting
    }

    pub fn phase(&self) -> FormPhase {
        if self.is_submitting {
            FormPhase::Submitting
        } else if self.last_submit_failed {
            FormPhase::Failed
        } else if !self.edited {
            FormPhase::Idle
        } else if self.is_valid() {
            FormPhase::Valid
        } else {
            FormPhase::Invalid
        }
    }

    fn payload(&self) -> NewContact {
        NewContact::new(&self.name, &self.email, &self.phone, self.category_id.clone())
    }

    fn touch(&mut self) {
        self.edited = true;
        self.last_submit_failed = false;
    }
}

/// Apply a message to the form model, queueing side effects into `cmds`.
pub fn update(
    model: &mut ContactFormModel,
    msg: ContactFormMsg,
    cmds: &mut Vec<ContactFormCommand>,
) {
    match msg {
        ContactFormMsg::Mounted => {
            model.categories_state = CategoriesState::Loading;
            cmds.push(ContactFormCommand::LoadCategories);
        }
        ContactFormMsg::CategoriesLoaded(categories) => {
            model.categories = categories;
            model.categories_state = CategoriesState::Loaded;
        }
        ContactFormMsg::CategoriesUnavailable(reason) => {
            tracing::warn!(%reason, "categories unavailable; continuing without them");
            model.categories.clear();
            model.categories_state = CategoriesState::Unavailable;
        }
        ContactFormMsg::NameChanged(name) => {
            model.touch();
            if name.is_empty() {
                model.errors.set_error(FormField::Name, "Name is required.");
            } else {
                model.errors.remove_error(FormField::Name);
            }
            model.name = name;
        }
        ContactFormMsg::EmailChanged(email) => {
            model.touch();
            if !email.is_empty() && !is_email_valid(&email) {
                model.errors.set_error(FormField::Email, "Invalid e-mail");
            } else {
                model.errors.remove_error(FormField::Email);
            }
            model.email = email;
        }
        ContactFormMsg::PhoneChanged(phone) => {
            model.touch();
            model.phone = format_phone(&phone);
        }
        ContactFormMsg::CategorySelected(category_id) => {
            model.touch();
            model.category_id = category_id;
        }
        ContactFormMsg::Submit => {
            if !model.can_submit() {
                tracing::debug!(phase = ?model.phase(), "submit ignored");
                return;
            }
            model.is_submitting = true;
            model.last_submit_failed = false;
            cmds.push(ContactFormCommand::Submit(model.payload()));
        }
        ContactFormMsg::SubmitFinished { succeeded } => {
            model.is_submitting = false;
            model.last_submit_failed = !succeeded;
        }
        ContactFormMsg::Reset => {
            model.name.clear();
            model.email.clear();
            model.phone.clear();
            model.category_id = None;
            model.errors.clear();
            model.edited = false;
            model.last_submit_failed = false;
        }
    }
}

/// Render the form and return messages triggered by user interaction.
pub fn view(
    ui: &mut egui::Ui,
    model: &ContactFormModel,
    button_label: &str,
) -> Vec<ContactFormMsg> {
    let mut msgs = Vec::new();
    let editable = !model.is_submitting();

    let mut name = model.name().to_string();
    if render_text_field(ui, &mut name, "Name *", editable, None).changed() {
        msgs.push(ContactFormMsg::NameChanged(name));
    }
    render_field_error(ui, model.errors.message_for(FormField::Name));
    ui.add_space(8.0);

    let mut email = model.email().to_string();
    if render_text_field(ui, &mut email, "E-mail", editable, None).changed() {
        msgs.push(ContactFormMsg::EmailChanged(email));
    }
    render_field_error(ui, model.errors.message_for(FormField::Email));
    ui.add_space(8.0);

    let mut phone = model.phone().to_string();
    if render_text_field(ui, &mut phone, "Phone", editable, Some(PHONE_CHAR_LIMIT)).changed() {
        msgs.push(ContactFormMsg::PhoneChanged(phone));
    }
    ui.add_space(8.0);

    render_category_select(ui, model, &mut msgs);
    ui.add_space(16.0);

    ui.horizontal(|ui| {
        let button = egui::Button::new(button_label).min_size(egui::vec2(160.0, 32.0));
        if ui
            .add_enabled(model.can_submit(), button)
            .on_disabled_hover_text("Enter a name and fix the highlighted fields")
            .clicked()
        {
            msgs.push(ContactFormMsg::Submit);
        }
        if model.is_submitting() {
            ui.add(egui::Spinner::new().size(16.0));
        }
    });

    msgs
}

fn render_text_field(
    ui: &mut egui::Ui,
    value: &mut String,
    hint: &str,
    enabled: bool,
    char_limit: Option<usize>,
) -> egui::Response {
    let mut edit = egui::TextEdit::singleline(value)
        .hint_text(hint)
        .desired_width(f32::INFINITY);
    if let Some(limit) = char_limit {
        edit = edit.char_limit(limit);
    }
    ui.add_enabled(enabled, edit)
}

fn render_field_error(ui: &mut egui::Ui, message: Option<&str>) {
    if let Some(message) = message {
        ui.label(
            egui::RichText::new(message)
                .small()
                .color(ui.visuals().error_fg_color),
        );
    }
}

/// Category dropdown; disabled while categories load or a submission is in flight.
fn render_category_select(
    ui: &mut egui::Ui,
    model: &ContactFormModel,
    msgs: &mut Vec<ContactFormMsg>,
) {
    let loading = model.categories_state() == CategoriesState::Loading;
    let selected_text = model
        .category_id()
        .and_then(|id| model.categories().iter().find(|c| &c.id == id))
        .map_or("Without category", |c| c.name.as_str())
        .to_string();

    ui.horizontal(|ui| {
        ui.add_enabled_ui(!loading && !model.is_submitting(), |ui| {
            let mut choice = model.category_id.clone();
            egui::ComboBox::from_id_salt("contact_category")
                .selected_text(selected_text)
                .width(ui.available_width().min(320.0))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut choice, None, "Without category");
                    for category in &model.categories {
                        ui.selectable_value(
                            &mut choice,
                            Some(category.id.clone()),
                            category.name.as_str(),
                        );
                    }
                });
            if choice != model.category_id {
                msgs.push(ContactFormMsg::CategorySelected(choice));
            }
        });
        if loading {
            ui.add(egui::Spinner::new().size(14.0));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(model: &mut ContactFormModel, msg: ContactFormMsg) -> Vec<ContactFormCommand> {
        let mut cmds = Vec::new();
        update(model, msg, &mut cmds);
        cmds
    }

    #[test]
    fn mount_requests_categories_and_disables_selector() {
        let mut model = ContactFormModel::default();

        let cmds = edit(&mut model, ContactFormMsg::Mounted);

        assert_eq!(cmds, vec![ContactFormCommand::LoadCategories]);
        assert_eq!(model.categories_state(), CategoriesState::Loading);
        assert_eq!(model.phase(), FormPhase::Idle);
    }

    #[test]
    fn category_failure_is_distinct_from_loading_but_silent() {
        let mut model = ContactFormModel::default();
        edit(&mut model, ContactFormMsg::Mounted);

        edit(&mut model, ContactFormMsg::CategoriesUnavailable("offline".into()));

        assert_eq!(model.categories_state(), CategoriesState::Unavailable);
        assert!(model.categories().is_empty());
        assert!(model.errors().is_empty());
    }

    #[test]
    fn empty_name_disables_submit() {
        let mut model = ContactFormModel::default();
        edit(&mut model, ContactFormMsg::NameChanged("A".into()));
        edit(&mut model, ContactFormMsg::NameChanged(String::new()));

        assert_eq!(
            model.errors().message_for(FormField::Name),
            Some("Name is required.")
        );
        assert!(!model.can_submit());
        assert_eq!(model.phase(), FormPhase::Invalid);
    }

    #[test]
    fn name_without_email_enables_submit() {
        let mut model = ContactFormModel::default();
        edit(&mut model, ContactFormMsg::NameChanged("Ann".into()));
        edit(&mut model, ContactFormMsg::EmailChanged(String::new()));

        assert!(model.errors().is_empty());
        assert!(model.can_submit());
        assert_eq!(model.phase(), FormPhase::Valid);
    }

    #[test]
    fn invalid_email_disables_submit_until_fixed() {
        let mut model = ContactFormModel::default();
        edit(&mut model, ContactFormMsg::NameChanged("Ann".into()));
        edit(&mut model, ContactFormMsg::EmailChanged("bad".into()));

        assert_eq!(
            model.errors().message_for(FormField::Email),
            Some("Invalid e-mail")
        );
        assert!(!model.can_submit());

        edit(&mut model, ContactFormMsg::EmailChanged("ann@example.com".into()));
        assert!(model.can_submit());
    }

    #[test]
    fn phone_is_formatted_and_never_errors() {
        let mut model = ContactFormModel::default();
        edit(&mut model, ContactFormMsg::PhoneChanged("11a98765x4321".into()));

        assert_eq!(model.phone(), "(11) 98765-4321");
        assert!(model.errors().is_empty());
    }

    #[test]
    fn submit_sets_flag_and_blocks_duplicates() {
        let mut model = ContactFormModel::default();
        edit(&mut model, ContactFormMsg::NameChanged("Ann".into()));
        edit(&mut model, ContactFormMsg::PhoneChanged("1234".into()));

        let cmds = edit(&mut model, ContactFormMsg::Submit);
        assert_eq!(
            cmds,
            vec![ContactFormCommand::Submit(NewContact::new(
                "Ann", "", "(12) 34", None
            ))]
        );
        assert!(model.is_submitting());
        assert_eq!(model.phase(), FormPhase::Submitting);

        assert!(edit(&mut model, ContactFormMsg::Submit).is_empty());
    }

    #[test]
    fn submit_is_ignored_when_invalid() {
        let mut model = ContactFormModel::default();

        assert!(edit(&mut model, ContactFormMsg::Submit).is_empty());
        assert!(!model.is_submitting());
    }

    #[test]
    fn finished_submission_reenables_regardless_of_outcome() {
        let mut model = ContactFormModel::default();
        edit(&mut model, ContactFormMsg::NameChanged("Ann".into()));
        edit(&mut model, ContactFormMsg::Submit);

        edit(&mut model, ContactFormMsg::SubmitFinished { succeeded: false });

        assert!(!model.is_submitting());
        assert_eq!(model.phase(), FormPhase::Failed);
        assert!(model.can_submit());
        assert_eq!(model.name(), "Ann");
    }

    #[test]
    fn reset_keeps_categories() {
        let mut model = ContactFormModel::default();
        let category = Category {
            id: RecordId::new("c-1"),
            name: "Friends".into(),
        };
        edit(&mut model, ContactFormMsg::CategoriesLoaded(vec![category.clone()]));
        edit(&mut model, ContactFormMsg::NameChanged("Ann".into()));
        edit(
            &mut model,
            ContactFormMsg::CategorySelected(Some(category.id.clone())),
        );

        edit(&mut model, ContactFormMsg::Reset);

        assert_eq!(model.name(), "");
        assert_eq!(model.category_id(), None);
        assert_eq!(model.categories(), &[category]);
        assert_eq!(model.phase(), FormPhase::Idle);
    }
}
