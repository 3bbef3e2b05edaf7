// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by UI and form logic.

pub mod email;
pub mod phone;

/// Check that an input looks like a conventional `local@domain.tld` address.
pub use email::is_email_valid;
/// Normalize phone input into the `(NN) NNNNN-NNNN` display format.
pub use phone::format_phone;
