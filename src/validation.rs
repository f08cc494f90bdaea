use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ApiError;

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Required-field checks for registration.
///
/// Messages are reported in a fixed order: first name, last name, email
/// address, password. The email syntax check only runs once a value is
/// present, so a missing email yields exactly one message.
pub fn validate_registration(
    first_name: &str,
    last_name: &str,
    email_address: &str,
    password: &str,
) -> Result<(), ApiError> {
    let mut errors = Vec::new();
    if first_name.trim().is_empty() {
        errors.push(r#"Please provide a value for the "first name""#.to_string());
    }
    if last_name.trim().is_empty() {
        errors.push(r#"Please provide a value for the "last name""#.to_string());
    }
    if email_address.trim().is_empty() {
        errors.push(r#"Please provide a value for the "email address""#.to_string());
    } else if !is_valid_email(email_address) {
        errors.push("Please provide a valid email address".to_string());
    }
    if password.is_empty() {
        errors.push(r#"Please provide a value for the "password""#.to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::ValidationFailed(errors))
    }
}

/// Required-field checks for course create/update, in order: title, description.
pub fn validate_course_fields(title: &str, description: &str) -> Result<(), ApiError> {
    let mut errors = Vec::new();
    if title.trim().is_empty() {
        errors.push(r#"Please provide a value for the "title""#.to_string());
    }
    if description.trim().is_empty() {
        errors.push(r#"Please provide a value for the "description""#.to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::ValidationFailed(errors))
    }
}
