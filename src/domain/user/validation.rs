//! User validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::entity::UserInput;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Username is required")]
    EmptyUsername,

    #[error("Username must be at least {0} characters long")]
    UsernameTooShort(usize),

    #[error("Email is required")]
    EmptyEmail,

    #[error("Email '{0}' is not a valid email address")]
    InvalidEmail(String),
}

pub const MIN_USERNAME_LENGTH: usize = 3;

/// Local part, a single `@`, and a dotted domain with no whitespace anywhere
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").unwrap());

/// Validate a username
///
/// Rules:
/// - Cannot be empty
/// - Minimum 3 characters
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if username.is_empty() {
        return Err(UserValidationError::EmptyUsername);
    }

    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(UserValidationError::UsernameTooShort(MIN_USERNAME_LENGTH));
    }

    Ok(())
}

/// Validate an email address
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(UserValidationError::InvalidEmail(email.to_string()));
    }

    Ok(())
}

/// Validate a full candidate, collecting one error per violated field rule
pub fn validate_user_input(input: &UserInput) -> Result<(), Vec<UserValidationError>> {
    let errors: Vec<UserValidationError> = [
        validate_username(&input.username),
        validate_email(&input.email),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
