//! In-memory record store.
//!
//! # Responsibility
//! - Hold the three outreach collections for one process.
//! - Enforce id uniqueness and foreign keys on every write.
//!
//! # Invariants
//! - State only changes through whole-record insert, replace or remove.
//! - A snapshot that breaks an invariant is rejected as a whole.

use crate::model::communication::{Communication, CommunicationId};
use crate::model::company::{Company, CompanyId};
use crate::model::method::{seed_communication_methods, CommunicationMethod, MethodId};
use crate::model::EntityKind;
use crate::store::record_store::{RecordStore, StoreError, StoreResult};
use crate::store::snapshot::StoreSnapshot;
use log::{debug, info};

/// Vec-backed [`RecordStore`] seeded with the built-in methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryRecordStore {
    companies: Vec<Company>,
    communications: Vec<Communication>,
    methods: Vec<CommunicationMethod>,
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRecordStore {
    /// Creates an empty store holding only the seed methods.
    pub fn new() -> Self {
        Self {
            companies: Vec::new(),
            communications: Vec::new(),
            methods: seed_communication_methods(),
        }
    }

    /// Rebuilds a store from a snapshot, replaying it through the normal
    /// write checks in dependency order (methods, companies, communications).
    ///
    /// # Errors
    /// - Any validation, duplicate-id or dangling-reference error found in
    ///   the snapshot.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> StoreResult<Self> {
        let mut store = Self {
            companies: Vec::with_capacity(snapshot.companies.len()),
            communications: Vec::with_capacity(snapshot.communications.len()),
            methods: Vec::with_capacity(snapshot.communication_methods.len()),
        };

        for method in snapshot.communication_methods {
            store.append_communication_method(method)?;
        }
        for company in snapshot.companies {
            store.create_company(company)?;
        }
        for communication in snapshot.communications {
            store.append_communication(communication)?;
        }

        info!(
            "event=store_load module=store status=ok companies={} communications={} methods={}",
            store.companies.len(),
            store.communications.len(),
            store.methods.len()
        );
        Ok(store)
    }

    /// Copies the current state into a snapshot.
    pub fn to_snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            companies: self.companies.clone(),
            communications: self.communications.clone(),
            communication_methods: self.methods.clone(),
        }
    }

    fn company_index(&self, id: CompanyId) -> Option<usize> {
        self.companies.iter().position(|company| company.id == id)
    }
}

impl RecordStore for InMemoryRecordStore {
    fn companies(&self) -> &[Company] {
        &self.companies
    }

    fn communications(&self) -> &[Communication] {
        &self.communications
    }

    fn communication_methods(&self) -> &[CommunicationMethod] {
        &self.methods
    }

    fn create_company(&mut self, mut company: Company) -> StoreResult<CompanyId> {
        company.normalize();
        company.validate()?;
        if self.company_index(company.id).is_some() {
            return Err(StoreError::DuplicateId {
                kind: EntityKind::Company,
                id: company.id,
            });
        }

        let id = company.id;
        self.companies.push(company);
        debug!("event=company_create module=store status=ok company_id={id}");
        Ok(id)
    }

    fn update_company(&mut self, mut company: Company) -> StoreResult<()> {
        company.normalize();
        company.validate()?;
        let index = self
            .company_index(company.id)
            .ok_or(StoreError::CompanyNotFound(company.id))?;

        debug!(
            "event=company_update module=store status=ok company_id={}",
            company.id
        );
        self.companies[index] = company;
        Ok(())
    }

    fn delete_company(&mut self, id: CompanyId) -> StoreResult<Company> {
        let index = self
            .company_index(id)
            .ok_or(StoreError::CompanyNotFound(id))?;
        let removed = self.companies.remove(index);

        let before = self.communications.len();
        self.communications
            .retain(|communication| communication.company_id != id);

        debug!(
            "event=company_delete module=store status=ok company_id={id} removed_communications={}",
            before - self.communications.len()
        );
        Ok(removed)
    }

    fn append_communication(
        &mut self,
        communication: Communication,
    ) -> StoreResult<CommunicationId> {
        communication.validate()?;
        if self
            .communications
            .iter()
            .any(|existing| existing.id == communication.id)
        {
            return Err(StoreError::DuplicateId {
                kind: EntityKind::Communication,
                id: communication.id,
            });
        }
        if self.company_index(communication.company_id).is_none() {
            return Err(StoreError::CompanyNotFound(communication.company_id));
        }
        if self.communication_method(communication.method_id).is_none() {
            return Err(StoreError::MethodNotFound(communication.method_id));
        }

        let id = communication.id;
        debug!(
            "event=communication_append module=store status=ok communication_id={id} company_id={}",
            communication.company_id
        );
        self.communications.push(communication);
        Ok(id)
    }

    fn append_communication_method(
        &mut self,
        method: CommunicationMethod,
    ) -> StoreResult<MethodId> {
        method.validate()?;
        if self.communication_method(method.id).is_some() {
            return Err(StoreError::DuplicateId {
                kind: EntityKind::CommunicationMethod,
                id: method.id,
            });
        }

        let id = method.id;
        self.methods.push(method);
        debug!("event=method_append module=store status=ok method_id={id}");
        Ok(id)
    }
}
