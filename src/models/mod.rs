// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure data types and validation state shared between UI and services.

pub mod contact;
pub mod field_errors;
