//! Outreach use-case service.
//!
//! # Responsibility
//! - Provide company CRUD, communication logging and method management on
//!   top of any [`RecordStore`].
//! - Assign ids to new records.
//!
//! # Invariants
//! - Service APIs never bypass store validation.
//! - `log_communication` appends for every target or for none.

use crate::model::communication::Communication;
use crate::model::company::{Company, CompanyDraft, CompanyId};
use crate::model::method::{CommunicationMethod, MethodId};
use crate::store::record_store::{RecordStore, StoreError};
use chrono::{DateTime, Utc};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for outreach use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Store rejected the write.
    Store(StoreError),
    /// Write succeeded but the record could not be read back.
    InconsistentState(&'static str),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent store state: {details}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::InconsistentState(_) => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Request to log the same contact against one or more companies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogCommunicationRequest {
    pub company_ids: Vec<CompanyId>,
    pub method_id: MethodId,
    pub date: DateTime<Utc>,
    pub notes: String,
}

/// New communication method fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDraft {
    pub name: String,
    pub description: String,
    /// Defaults to one past the highest existing sequence.
    pub sequence: Option<u32>,
    pub is_mandatory: bool,
}

/// Outreach service facade over a record store.
pub struct OutreachService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> OutreachService<S> {
    /// Creates a service owning the provided store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrows the underlying store for read-only views.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the store, e.g. to export a snapshot after mutations.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Creates a company from user input and returns the stored record.
    pub fn add_company(&mut self, draft: CompanyDraft) -> ServiceResult<Company> {
        let company = draft.into_company(Uuid::new_v4());
        let id = self.store.create_company(company)?;
        info!("event=company_add module=service status=ok company_id={id}");
        self.read_back_company(id, "created company not found in read-back")
    }

    /// Replaces a company with the same id and returns the stored record.
    pub fn update_company(&mut self, company: Company) -> ServiceResult<Company> {
        let id = company.id;
        self.store.update_company(company)?;
        info!("event=company_update module=service status=ok company_id={id}");
        self.read_back_company(id, "updated company not found in read-back")
    }

    /// Deletes a company and its communication history.
    pub fn delete_company(&mut self, id: CompanyId) -> ServiceResult<Company> {
        let removed = self.store.delete_company(id)?;
        info!("event=company_delete module=service status=ok company_id={id}");
        Ok(removed)
    }

    /// Looks up one company by id.
    pub fn get_company(&self, id: CompanyId) -> Option<&Company> {
        self.store.company(id)
    }

    /// Lists companies in insertion order.
    pub fn list_companies(&self) -> &[Company] {
        self.store.companies()
    }

    /// Logs one communication per target company.
    ///
    /// # Contract
    /// - Empty `company_ids` logs nothing and returns an empty list.
    /// - Unknown method or company ids fail before any append.
    /// - Returned communications follow `company_ids` order.
    pub fn log_communication(
        &mut self,
        request: LogCommunicationRequest,
    ) -> ServiceResult<Vec<Communication>> {
        if request.company_ids.is_empty() {
            return Ok(Vec::new());
        }
        if self.store.communication_method(request.method_id).is_none() {
            return Err(StoreError::MethodNotFound(request.method_id).into());
        }
        if let Some(missing) = request
            .company_ids
            .iter()
            .find(|id| self.store.company(**id).is_none())
        {
            return Err(StoreError::CompanyNotFound(*missing).into());
        }

        let mut logged = Vec::with_capacity(request.company_ids.len());
        for company_id in &request.company_ids {
            let communication = Communication::new(
                *company_id,
                request.method_id,
                request.date,
                request.notes.clone(),
            );
            self.store.append_communication(communication.clone())?;
            logged.push(communication);
        }

        info!(
            "event=communication_log module=service status=ok companies={} method_id={}",
            logged.len(),
            request.method_id
        );
        Ok(logged)
    }

    /// Appends a custom communication method.
    pub fn add_communication_method(
        &mut self,
        draft: MethodDraft,
    ) -> ServiceResult<CommunicationMethod> {
        let sequence = draft.sequence.unwrap_or_else(|| {
            self.store
                .communication_methods()
                .iter()
                .map(|method| method.sequence)
                .max()
                .map_or(1, |max| max.saturating_add(1))
        });
        let method = CommunicationMethod {
            id: Uuid::new_v4(),
            name: draft.name.trim().to_string(),
            description: draft.description.trim().to_string(),
            sequence,
            is_mandatory: draft.is_mandatory,
        };

        let id = self.store.append_communication_method(method)?;
        info!("event=method_add module=service status=ok method_id={id} sequence={sequence}");
        self.store
            .communication_method(id)
            .cloned()
            .ok_or(ServiceError::InconsistentState(
                "created method not found in read-back",
            ))
    }

    /// Lists methods by `sequence`; equal sequences keep insertion order.
    pub fn list_communication_methods(&self) -> Vec<&CommunicationMethod> {
        let mut methods: Vec<&CommunicationMethod> =
            self.store.communication_methods().iter().collect();
        methods.sort_by_key(|method| method.sequence);
        methods
    }

    fn read_back_company(&self, id: CompanyId, details: &'static str) -> ServiceResult<Company> {
        self.store
            .company(id)
            .cloned()
            .ok_or(ServiceError::InconsistentState(details))
    }
}
