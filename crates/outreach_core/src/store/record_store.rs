//! Record store contract.
//!
//! # Responsibility
//! - Give the aggregator read access to companies, communications and
//!   communication methods.
//! - Define the only mutations the outreach core performs.
//!
//! # Invariants
//! - Ids are unique within each collection.
//! - Every stored communication references an existing company and method.
//! - Writes call the record's `validate()` before mutating state.

use crate::model::communication::{Communication, CommunicationId};
use crate::model::company::{Company, CompanyId};
use crate::model::method::{CommunicationMethod, MethodId};
use crate::model::validation::ValidationError;
use crate::model::EntityKind;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by record store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(ValidationError),
    DuplicateId { kind: EntityKind, id: Uuid },
    CompanyNotFound(CompanyId),
    MethodNotFound(MethodId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId { kind, id } => write!(f, "duplicate {kind} id: {id}"),
            Self::CompanyNotFound(id) => write!(f, "company not found: {id}"),
            Self::MethodNotFound(id) => write!(f, "communication method not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Owner of the three outreach collections.
///
/// Read accessors return records in insertion order.
pub trait RecordStore {
    /// All companies.
    fn companies(&self) -> &[Company];
    /// All communications, across companies.
    fn communications(&self) -> &[Communication];
    /// All methods, seed methods first.
    fn communication_methods(&self) -> &[CommunicationMethod];

    /// Looks up one company; `None` when it does not exist.
    fn company(&self, id: CompanyId) -> Option<&Company> {
        self.companies().iter().find(|company| company.id == id)
    }

    /// Looks up one method; `None` when it does not exist.
    fn communication_method(&self, id: MethodId) -> Option<&CommunicationMethod> {
        self.communication_methods()
            .iter()
            .find(|method| method.id == id)
    }

    /// Stores a new company and returns its id.
    ///
    /// Fails with `DuplicateId` when the id is taken.
    fn create_company(&mut self, company: Company) -> StoreResult<CompanyId>;

    /// Replaces the stored company with the same id.
    fn update_company(&mut self, company: Company) -> StoreResult<()>;

    /// Removes a company together with its communications.
    fn delete_company(&mut self, id: CompanyId) -> StoreResult<Company>;

    /// Appends a communication whose company and method both exist.
    fn append_communication(
        &mut self,
        communication: Communication,
    ) -> StoreResult<CommunicationId>;

    /// Appends a method with a fresh id.
    fn append_communication_method(
        &mut self,
        method: CommunicationMethod,
    ) -> StoreResult<MethodId>;
}
