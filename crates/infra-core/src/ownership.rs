//! Who may update or delete a record.

use serde::{Deserialize, Serialize};

use crate::error::InfraError;

/// Ownership policy, configured per DNA.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnershipPolicy {
    /// Only the author of the original create action
    #[default]
    CreatorOnly,
    /// Any agent
    Open,
}

/// Properties read from the DNA manifest:
///
/// ```yaml
/// properties:
///   ownership: creator_only
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnaProperties {
    pub ownership: OwnershipPolicy,
}

/// A mutation subject to the ownership policy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    Update,
    Delete,
}

impl Mutation {
    pub fn verb(&self) -> &'static str {
        match self {
            Mutation::Update => "update",
            Mutation::Delete => "delete",
        }
    }
}

impl OwnershipPolicy {
    pub fn permits(&self, caller_is_author: bool) -> bool {
        match self {
            OwnershipPolicy::CreatorOnly => caller_is_author,
            OwnershipPolicy::Open => true,
        }
    }

    /// Forbidden unless the policy permits the caller.
    pub fn authorize(
        &self,
        mutation: Mutation,
        entity: &str,
        caller_is_author: bool,
    ) -> Result<(), InfraError> {
        if self.permits(caller_is_author) {
            Ok(())
        } else {
            Err(InfraError::forbidden(format!(
                "You do not have permission to {} this {}.",
                mutation.verb(),
                entity
            )))
        }
    }
}

/// Check the author of a mutation against the author of the original record.
pub fn authorize_author<A: PartialEq + ?Sized>(
    policy: OwnershipPolicy,
    mutation: Mutation,
    entity: &str,
    original_author: &A,
    author: &A,
) -> Result<(), InfraError> {
    policy.authorize(mutation, entity, original_author == author)
}
