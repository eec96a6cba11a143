//! Field-level input validation, run before any domain logic. Each operation
//! gets an explicit validator returning every violation at once rather than
//! stopping at the first bad field.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::database::models::EmployeeInput;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Registration input: name, email, and department must be non-blank and the
/// email must look like an email. Date presence is enforced by
/// deserialization, as it is for leave-request input, which therefore has no
/// validator of its own.
pub fn validate_employee_input(input: &EmployeeInput) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Vec::new();

    if input.name.trim().is_empty() {
        violations.push(FieldViolation::new("name", "Name is required"));
    }

    let email = input.email.trim();
    if email.is_empty() {
        violations.push(FieldViolation::new("email", "Email is required"));
    } else if !EMAIL_RE.is_match(email) {
        violations.push(FieldViolation::new("email", "Invalid email format"));
    }

    if input.department.trim().is_empty() {
        violations.push(FieldViolation::new("department", "Department is required"));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
