//! Form input validation for the auth screens.
//!
//! Password policy and registration checks are pure so the register page can
//! surface inline messages and the tests can cover every rejection path.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::RegisterData;

/// Characters counted as symbols by the password policy.
const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Per-rule results of the password policy, rendered as a live checklist on
/// the register form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordChecks {
    pub min_length: bool,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl PasswordChecks {
    /// True when every rule passes.
    pub fn all_met(self) -> bool {
        self.min_length && self.has_upper && self.has_lower && self.has_digit && self.has_symbol
    }
}

/// Evaluate the password policy: length >= 8, at least one upper-case
/// letter, lower-case letter, digit, and symbol.
pub fn check_password(password: &str) -> PasswordChecks {
    PasswordChecks {
        min_length: password.chars().count() >= 8,
        has_upper: password.chars().any(|c| c.is_ascii_uppercase()),
        has_lower: password.chars().any(|c| c.is_ascii_lowercase()),
        has_digit: password.chars().any(|c| c.is_ascii_digit()),
        has_symbol: password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)),
    }
}

/// Validate a registration submission. Returns the inline message shown to
/// the user on the first failed check.
pub fn validate_registration(data: &RegisterData, confirm: &str) -> Result<(), &'static str> {
    if data.name.trim().is_empty()
        || data.email.trim().is_empty()
        || data.organization.trim().is_empty()
        || data.password.is_empty()
    {
        return Err("All fields are required.");
    }
    if data.password != confirm {
        return Err("Passwords do not match.");
    }
    if !check_password(&data.password).all_met() {
        return Err("Password does not meet security requirements.");
    }
    Ok(())
}

/// Validate a login submission, trimming the email.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}
