// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Phone number formatting applied while the user types.

/// Digits kept from the input; longer input is truncated.
pub const MAX_PHONE_DIGITS: usize = 11;

/// Digits that make up the trailing group after the hyphen.
const LINE_DIGITS: usize = 4;

/// Area-code length wrapped in parentheses.
const AREA_DIGITS: usize = 2;

/// Strip non-digits and format as `(NN) NNNNN-NNNN`.
///
/// # Steps
/// - Keep ASCII digits only, at most [`MAX_PHONE_DIGITS`].
/// - Up to two digits are returned bare so typing the area code is not interrupted.
/// - Beyond that the area code is wrapped as `(NN) `.
/// - When more than four digits follow the area code, a hyphen separates the last four.
///
/// Formatting its own output yields the same string.
pub fn format_phone(value: &str) -> String {
    let digits: String = value
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PHONE_DIGITS)
        .collect();

    if digits.len() <= AREA_DIGITS {
        return digits;
    }

    let (area, rest) = digits.split_at(AREA_DIGITS);
    let mut out = String::with_capacity(MAX_PHONE_DIGITS + 4);
    out.push('(');
    out.push_str(area);
    out.push_str(") ");

    if rest.len() > LINE_DIGITS {
        let (prefix, line) = rest.split_at(rest.len() - LINE_DIGITS);
        out.push_str(prefix);
        out.push('-');
        out.push_str(line);
    } else {
        out.push_str(rest);
    }

    out
}
