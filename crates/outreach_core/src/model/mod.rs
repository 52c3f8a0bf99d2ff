//! Outreach domain model.
//!
//! # Responsibility
//! - Define companies, communication methods and logged communications.
//! - Own the field-level rules every record must satisfy before it reaches
//!   a record store.
//!
//! # Invariants
//! - Every record is identified by a non-nil UUID.
//! - Communications are immutable once created.

use std::fmt::{Display, Formatter};

pub mod communication;
pub mod company;
pub mod method;
pub mod validation;

/// Record collections known to the store, used to label ids in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Company,
    Communication,
    CommunicationMethod,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Company => "company",
            Self::Communication => "communication",
            Self::CommunicationMethod => "communication method",
        };
        f.write_str(label)
    }
}
