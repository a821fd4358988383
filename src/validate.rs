// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Typed request payload validation.
//!
//! Each entry point takes a deserialized request and returns
//! `Result<(), Vec<FieldError>>` -- a tagged result, not an exception path.
//! Callers map a failure to a 400 without touching the store.
//!
//! The admin and user signup policies differ on purpose (the user path caps
//! password length at 50 and bounds names to 3-50 chars, the admin path does
//! not). Unifying them is a product decision, not something to harmonize
//! silently here.

use serde::Serialize;
use url::Url;
use utoipa::ToSchema;

use crate::models::{CreateCourseRequest, SigninRequest, SignupRequest};

/// Characters accepted as the password's required special character.
pub const PASSWORD_SPECIAL_CHARS: &str = r"!@#$%^&*()_+{}[]:;<>,.?~\/-";

const PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_MAX_LEN: usize = 50;
const NAME_MIN_LEN: usize = 3;
const NAME_MAX_LEN: usize = 50;

/// A single violated field with a human-readable message.
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Admin signup policy: full password policy with no upper length bound,
/// names only need to be non-empty.
pub fn admin_signup(request: &SignupRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    check_email(&mut errors, &request.email);
    check_password(&mut errors, &request.password, None);
    check_name_non_empty(&mut errors, "firstName", &request.first_name);
    check_name_non_empty(&mut errors, "lastName", &request.last_name);
    finish(errors)
}

/// User signup policy: password capped at 50 chars, names bounded 3-50.
pub fn user_signup(request: &SignupRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    check_email(&mut errors, &request.email);
    check_password(&mut errors, &request.password, Some(PASSWORD_MAX_LEN));
    check_name_bounded(&mut errors, "firstName", &request.first_name);
    check_name_bounded(&mut errors, "lastName", &request.last_name);
    finish(errors)
}

/// User signin re-validates the credential schema before any lookup, so a
/// malformed password is a 400, never a 403. The admin signin path has no
/// counterpart to this.
pub fn user_credentials(request: &SigninRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    check_email(&mut errors, &request.email);
    check_password(&mut errors, &request.password, Some(PASSWORD_MAX_LEN));
    finish(errors)
}

/// Course creation payload: the image URL must parse, the rest are typed by
/// deserialization.
pub fn course_payload(request: &CreateCourseRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if Url::parse(&request.image_url).is_err() {
        errors.push(FieldError::new("imageUrl", "must be a valid URL"));
    }
    finish(errors)
}

/// Syntactic email check: one `@`, non-empty local part, dotted domain,
/// no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    // Domain needs a dot with label text on both sides.
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn check_email(errors: &mut Vec<FieldError>, email: &str) {
    if !is_valid_email(email) {
        errors.push(FieldError::new("email", "must be a valid email address"));
    }
}

fn check_password(errors: &mut Vec<FieldError>, password: &str, max_len: Option<usize>) {
    let len = password.chars().count();
    if len < PASSWORD_MIN_LEN {
        errors.push(FieldError::new(
            "password",
            format!("must be at least {PASSWORD_MIN_LEN} characters"),
        ));
    }
    if let Some(max) = max_len {
        if len > max {
            errors.push(FieldError::new(
                "password",
                format!("must be at most {max} characters"),
            ));
        }
    }

    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));

    if !(has_uppercase && has_lowercase && has_digit && has_special) {
        errors.push(FieldError::new(
            "password",
            "must include one uppercase letter, one lowercase letter, one number, and one special character",
        ));
    }
}

fn check_name_non_empty(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.is_empty() {
        errors.push(FieldError::new(field, "must not be empty"));
    }
}

fn check_name_bounded(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    let len = value.chars().count();
    if len < NAME_MIN_LEN || len > NAME_MAX_LEN {
        errors.push(FieldError::new(
            field,
            format!("must be between {NAME_MIN_LEN} and {NAME_MAX_LEN} characters"),
        ));
    }
}

fn finish(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
