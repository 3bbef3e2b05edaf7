// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! E-mail address validation for form input.

use email_address::{EmailAddress, Options};

/// Return `true` when `value` is a `local@domain` address with a dotted domain.
///
/// Syntax is checked with `email_address` restricted to bare addresses: no
/// display text (`Ann <a@b.com>`), no domain literals (`a@[1.2.3.4]`) and no
/// quoted local parts. The domain must also contain at least one dot
/// separating non-empty labels, so `user@localhost` is rejected.
///
/// # Examples
///
/// ```rust,ignore
/// assert!(is_email_valid("a@b.com"));
/// assert!(!is_email_valid("a@b"));
/// ```
pub fn is_email_valid(value: &str) -> bool {
    let options = Options::default()
        .without_display_text()
        .without_domain_literal();
    let Ok(address) = EmailAddress::parse_with_options(value, options) else {
        return false;
    };
    let local = address.local_part();
    let domain = address.domain();
    address.as_str() == value
        && !local.is_empty()
        && !local.starts_with('"')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_conventional_addresses() {
        assert!(is_email_valid("a@b.com"));
        assert!(is_email_valid("ann.smith+work@mail.example.org"));
    }

    #[test]
    fn rejects_missing_parts() {
        for input in ["", "a", "@b.com", "a@", "a@b", "ab.com", "a@@b.com", "a@b..com", "a@.com"] {
            assert!(!is_email_valid(input), "{input:?} should be rejected");
        }
    }

    #[test]
    fn rejects_decorated_addresses() {
        for input in ["Ann <a@b.com>", "a@[1.2.3.4]", "\"a b\"@c.com"] {
            assert!(!is_email_valid(input), "{input:?} should be rejected");
        }
    }

    #[test]
    fn rejects_whitespace() {
        assert!(!is_email_valid("a b@c.com"));
        assert!(!is_email_valid(" a@b.com"));
    }
}
