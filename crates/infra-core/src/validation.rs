//! Accumulating field validation.
//!
//! Integrity zomes turn the first message into
//! `ValidateCallbackResult::Invalid`; coordinators turn the whole report into
//! an [`InfraError::Validation`].

use serde::{Deserialize, Serialize};

use crate::error::InfraError;

/// Maximum length accepted for short text fields (names, districts, sectors)
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length of a district or sector name
pub const MAX_AREA_NAME_LENGTH: usize = 100;

/// Maximum length of a contact number
pub const MAX_CONTACT_LENGTH: usize = 20;

/// Validation error with the offending field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result that can accumulate multiple errors
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
    }

    /// Message of the first error, if any.
    pub fn first_message(&self) -> Option<String> {
        self.errors.first().map(|e| e.message.clone())
    }

    pub fn into_result(self) -> Result<(), InfraError> {
        if self.is_valid() {
            return Ok(());
        }
        let messages: Vec<String> = self.errors.iter().map(|e| e.message.clone()).collect();
        Err(InfraError::Validation(messages.join("; ")))
    }

    /// Require a non-blank text field no longer than `max_len` characters.
    pub fn require_text(&mut self, field: &str, label: &str, value: &str, max_len: usize) {
        if value.trim().is_empty() {
            self.add_error(field, format!("{} is required", label));
        } else if value.chars().count() > max_len {
            self.add_error(
                field,
                format!("{} must be at most {} characters", label, max_len),
            );
        }
    }

    /// Require a finite, non-negative measurement.
    pub fn require_non_negative(&mut self, field: &str, label: &str, value: f64) {
        if !value.is_finite() {
            self.add_error(field, format!("{} must be a finite number", label));
        } else if value < 0.0 {
            self.add_error(field, format!("{} cannot be negative", label));
        }
    }

    /// Require a finite percentage between 0 and 100.
    pub fn require_percentage(&mut self, field: &str, label: &str, value: f64) {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            self.add_error(field, format!("{} must be between 0 and 100", label));
        }
    }
}

/// Shared checks for the location fields every facility and population
/// record carries.
pub fn check_area_fields(district: &str, sector: &str) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.require_text("district", "District", district, MAX_AREA_NAME_LENGTH);
    report.require_text("sector", "Sector", sector, MAX_AREA_NAME_LENGTH);
    report
}
