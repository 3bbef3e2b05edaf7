// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Network access to the contacts API.

pub mod contacts;
pub mod http_client;

pub use contacts::{ContactsBackend, ContactsService};
pub use http_client::{HttpClient, HttpError};
