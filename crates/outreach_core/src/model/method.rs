//! Communication method reference data.
//!
//! # Invariants
//! - The seed set always has the same five methods with fixed ids, so
//!   snapshots written by one run stay valid for the next.
//! - The first method of a store's list is the reference method suggested
//!   for the next contact.

use crate::model::validation::ValidationError;
use crate::model::EntityKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a communication method.
pub type MethodId = Uuid;

/// Exact display name that gets the email icon.
pub const EMAIL_METHOD_NAME: &str = "Email";
/// Exact display name that gets the phone icon.
pub const PHONE_CALL_METHOD_NAME: &str = "Phone Call";

/// A channel used to reach a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicationMethod {
    pub id: MethodId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Display/priority order, lowest first.
    pub sequence: u32,
    pub is_mandatory: bool,
}

impl CommunicationMethod {
    /// Rejects a nil id or a blank name.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_nil() {
            return Err(ValidationError::NilId(EntityKind::CommunicationMethod));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankField("method name"));
        }
        Ok(())
    }
}

/// Returns the built-in methods in seed order.
pub fn seed_communication_methods() -> Vec<CommunicationMethod> {
    [
        ("LinkedIn Post", "Post on company LinkedIn page", true),
        ("LinkedIn Message", "Direct message on LinkedIn", true),
        (EMAIL_METHOD_NAME, "Email communication", true),
        (PHONE_CALL_METHOD_NAME, "Phone call communication", true),
        ("Other", "Other forms of communication", false),
    ]
    .into_iter()
    .zip(1u32..)
    .map(
        |((name, description, is_mandatory), sequence)| CommunicationMethod {
            id: seed_method_id(sequence),
            name: name.to_string(),
            description: description.to_string(),
            sequence,
            is_mandatory,
        },
    )
    .collect()
}

/// Fixed id of the seed method at 1-based `sequence`.
pub fn seed_method_id(sequence: u32) -> MethodId {
    Uuid::from_u128(u128::from(sequence))
}

#[cfg(test)]
mod tests {
    use super::{seed_communication_methods, seed_method_id, EMAIL_METHOD_NAME};
    use std::collections::HashSet;

    #[test]
    fn seed_has_five_methods_in_sequence_order() {
        let methods = seed_communication_methods();
        let names: Vec<&str> = methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["LinkedIn Post", "LinkedIn Message", "Email", "Phone Call", "Other"]
        );
        let sequences: Vec<u32> = methods.iter().map(|m| m.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3, 4, 5]);
        assert!(!methods[4].is_mandatory);
        assert!(methods[..4].iter().all(|m| m.is_mandatory));
    }

    #[test]
    fn seed_ids_are_stable_unique_and_valid() {
        let methods = seed_communication_methods();
        let ids: HashSet<_> = methods.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), methods.len());
        assert_eq!(methods[2].id, seed_method_id(3));
        assert_eq!(methods[2].name, EMAIL_METHOD_NAME);
        assert_eq!(
            methods[0].id.to_string(),
            "00000000-0000-0000-0000-000000000001"
        );
        for method in &methods {
            method.validate().unwrap();
        }
    }
}
