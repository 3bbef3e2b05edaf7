// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Reusable egui components structured for MVU-style updates.

pub mod contact_form;
pub mod contact_list;
pub mod page_header;

pub use page_header::page_header;
