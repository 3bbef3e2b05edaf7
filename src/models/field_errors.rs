// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Per-field validation messages for the contact form.

/// Form fields that can carry a validation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
}

/// A single validation message bound to one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

/// Insertion-ordered registry holding at most one message per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    items: Vec<FieldError>,
}

impl FieldErrors {
    /// Register `message` for `field`, replacing any previous message in place.
    pub fn set_error(&mut self, field: FormField, message: impl Into<String>) {
        let message = message.into();
        match self.items.iter_mut().find(|err| err.field == field) {
            Some(existing) => existing.message = message,
            None => self.items.push(FieldError { field, message }),
        }
    }

    /// Drop the message for `field`; no-op when none is registered.
    pub fn remove_error(&mut self, field: FormField) {
        self.items.retain(|err| err.field != field);
    }

    pub fn message_for(&self, field: FormField) -> Option<&str> {
        self.items
            .iter()
            .find(|err| err.field == field)
            .map(|err| err.message.as_str())
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.items
    }

    /// No field currently carries a message.
    pub fn is_empty(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
