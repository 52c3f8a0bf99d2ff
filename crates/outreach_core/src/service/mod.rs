//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate record store calls into use-case level APIs.
//! - Build the dashboard projection consumed by presentation layers.

pub mod dashboard_service;
pub mod outreach_service;
