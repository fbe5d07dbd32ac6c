//! Signup form validation.
//!
//! [`SignupRules`] is built once at startup from configuration and passed to
//! the signup handler through application state. Each failed rule produces
//! the user-facing message for that field; the first failing field wins.

use serde::Deserialize;
use validator::ValidateEmail;

use crate::roles::Role;

/// Default minimum password length.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Name length bounds (inclusive), matching `VARCHAR(100)` columns.
pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 100;

/// Matches `users.email VARCHAR(255)`.
pub const MAX_EMAIL_LENGTH: usize = 255;

/// Matches `users.phone VARCHAR(20)`.
pub const MAX_PHONE_LENGTH: usize = 20;

/// Raw signup payload. Missing fields deserialize as empty strings so they
/// are reported by the field rules instead of as a body parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub role: String,
}

/// Field rules applied to a [`SignupForm`].
#[derive(Debug, Clone)]
pub struct SignupRules {
    pub min_password_length: usize,
}

impl Default for SignupRules {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl SignupRules {
    pub fn new(min_password_length: usize) -> Self {
        Self {
            min_password_length,
        }
    }

    /// Check every field and return the parsed role on success.
    pub fn validate(&self, form: &SignupForm) -> Result<Role, String> {
        if !name_in_bounds(&form.first_name) {
            return Err(format!(
                "First name must be at least {MIN_NAME_LENGTH} characters long"
            ));
        }
        if !name_in_bounds(&form.last_name) {
            return Err(format!(
                "Last name must be at least {MIN_NAME_LENGTH} characters long"
            ));
        }
        if form.email.chars().count() > MAX_EMAIL_LENGTH || !form.email.validate_email() {
            return Err("Please provide a valid email address".to_string());
        }
        if form.password.chars().count() < self.min_password_length {
            return Err(format!(
                "Password must be at least {} characters long",
                self.min_password_length
            ));
        }
        let phone = form.phone.trim();
        if phone.is_empty() {
            return Err("Phone number is required".to_string());
        }
        if phone.chars().count() > MAX_PHONE_LENGTH {
            return Err(format!(
                "Phone number must be at most {MAX_PHONE_LENGTH} characters long"
            ));
        }
        form.role
            .parse::<Role>()
            .map_err(|_| "Role must be either ADMIN or USER".to_string())
    }
}

fn name_in_bounds(name: &str) -> bool {
    let len = name.trim().chars().count();
    (MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&len)
}
