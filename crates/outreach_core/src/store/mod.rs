//! Record store contract and in-memory implementation.
//!
//! # Responsibility
//! - Define the data context every outreach operation receives explicitly.
//! - Keep id and foreign-key rules in one place.
//!
//! # Invariants
//! - There is no process-wide store; callers own and pass it.

pub mod memory_store;
pub mod record_store;
pub mod snapshot;
