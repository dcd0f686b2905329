//! Ownership enforcement at validation time.
//!
//! The coordinators check ownership before writing; this module repeats the
//! check for `RegisterUpdate` and `RegisterDelete` ops so that a direct
//! `update_entry`/`delete_entry` against another agent's record is rejected
//! by every validating peer.

use hdi::prelude::*;

use crate::ownership::{authorize_author, DnaProperties, Mutation, OwnershipPolicy};

/// Ownership policy of the running DNA. Missing or unreadable properties
/// give the default policy.
pub fn dna_ownership_policy() -> ExternResult<OwnershipPolicy> {
    let properties = dna_info()?.modifiers.properties;
    let policy = holochain_serialized_bytes::decode::<_, DnaProperties>(properties.bytes())
        .map(|props| props.ownership)
        .unwrap_or_default();
    Ok(policy)
}

/// Validate the author of an update or delete against the original record.
/// Every other op is `Valid` here.
pub fn validate_ownership(op: &Op, entity: &str) -> ExternResult<ValidateCallbackResult> {
    let (mutation, target, author) = match op {
        Op::RegisterUpdate(RegisterUpdate { update, .. }) => {
            let update = &update.hashed.content;
            (
                Mutation::Update,
                update.original_action_address.clone(),
                update.author.clone(),
            )
        }
        Op::RegisterDelete(RegisterDelete { delete }) => {
            let delete = &delete.hashed.content;
            (Mutation::Delete, delete.deletes_address.clone(), delete.author.clone())
        }
        _ => return Ok(ValidateCallbackResult::Valid),
    };

    let original = must_get_action(target)?;
    let policy = dna_ownership_policy()?;
    match authorize_author(policy, mutation, entity, original.action().author(), &author) {
        Ok(()) => Ok(ValidateCallbackResult::Valid),
        Err(err) => Ok(ValidateCallbackResult::Invalid(err.to_string())),
    }
}
