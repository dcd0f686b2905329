use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by registry operations.
///
/// All of them are user-correctable; none is retried.
#[derive(Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfraError {
    /// Bad or inconsistent input: missing field, sum mismatch, duplicate area,
    /// unknown enum value.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced entity does not exist or has been deleted.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The ownership policy denied an update or delete.
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl InfraError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    /// Not-found error for a facility reference that does not resolve.
    pub fn facility_not_found() -> Self {
        Self::NotFound("Health facility does not exist".to_string())
    }

    /// Not-found error for a facility-name lookup with no match.
    pub fn facility_name_not_found(name: &str) -> Self {
        Self::NotFound(format!("No health facility found with the name '{}'", name))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }
}

pub type InfraResult<T> = Result<T, InfraError>;
