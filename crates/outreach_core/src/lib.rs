//! Core domain logic for the outreach tracker.
//! Companies, their communication history and when to contact them next.

pub mod logging;
pub mod model;
pub mod schedule;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::communication::{Communication, CommunicationId};
pub use model::company::{
    Company, CompanyDraft, CompanyId, DEFAULT_COMMUNICATION_PERIODICITY,
    MAX_COMMUNICATION_PERIODICITY,
};
pub use model::method::{
    seed_communication_methods, seed_method_id, CommunicationMethod, MethodId,
};
pub use model::validation::ValidationError;
pub use model::EntityKind;
pub use schedule::aggregator::{
    company_overview, last_communication, next_scheduled, recent_history, CompanyOverview,
    NextScheduled, RecentHistory, RECENT_HISTORY_LIMIT,
};
pub use schedule::urgency::{classify_urgency, Urgency};
pub use service::dashboard_service::{
    DashboardConfig, DashboardRow, DashboardService, HistoryChip, MethodIcon, NextScheduledCell,
    RowHighlight,
};
pub use service::outreach_service::{
    LogCommunicationRequest, MethodDraft, OutreachService, ServiceError, ServiceResult,
};
pub use store::memory_store::InMemoryRecordStore;
pub use store::record_store::{RecordStore, StoreError, StoreResult};
pub use store::snapshot::StoreSnapshot;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
