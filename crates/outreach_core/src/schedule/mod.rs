//! Communication scheduling and history aggregation.
//!
//! # Responsibility
//! - Compute each company's recent history and next contact date.
//! - Classify the next contact as overdue, due today or scheduled.
//!
//! # Invariants
//! - Pure functions over borrowed data; nothing here fails. Missing data
//!   gives empty or `None` results.

pub mod aggregator;
pub mod urgency;
