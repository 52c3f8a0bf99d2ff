//! Logged communication record.
//!
//! # Invariants
//! - A communication is never edited after it is created.
//! - `company_id` and `method_id` point at existing records; the store
//!   checks this on append.

use crate::model::company::CompanyId;
use crate::model::method::MethodId;
use crate::model::validation::ValidationError;
use crate::model::EntityKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a communication.
pub type CommunicationId = Uuid;

/// One contact with a company through one method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Communication {
    pub id: CommunicationId,
    pub company_id: CompanyId,
    pub method_id: MethodId,
    /// Instant of contact, serialized as RFC 3339.
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
}

impl Communication {
    /// Creates a communication with a generated id.
    pub fn new(
        company_id: CompanyId,
        method_id: MethodId,
        date: DateTime<Utc>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_id,
            method_id,
            date,
            notes: notes.into(),
        }
    }

    /// Rejects nil record and foreign-key ids.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_nil() {
            return Err(ValidationError::NilId(EntityKind::Communication));
        }
        if self.company_id.is_nil() {
            return Err(ValidationError::NilId(EntityKind::Company));
        }
        if self.method_id.is_nil() {
            return Err(ValidationError::NilId(EntityKind::CommunicationMethod));
        }
        Ok(())
    }
}
