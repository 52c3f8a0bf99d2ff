//! Field-level validation errors shared by all model records.

use crate::model::company::MAX_COMMUNICATION_PERIODICITY;
use crate::model::EntityKind;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reason a record was rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Record or foreign-key id is the nil UUID.
    NilId(EntityKind),
    /// Required text field is blank after trim.
    BlankField(&'static str),
    /// Periodicity must be at least one day.
    InvalidPeriodicity(u32),
    /// Email entry does not look like `local@domain`.
    InvalidEmail(String),
    /// Profile URL is not an http(s) URL.
    InvalidProfileUrl(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId(kind) => write!(f, "{kind} id must not be nil"),
            Self::BlankField(field) => write!(f, "{field} must not be blank"),
            Self::InvalidPeriodicity(days) => {
                write!(
                    f,
                    "communication periodicity must be between 1 and \
                     {MAX_COMMUNICATION_PERIODICITY} days, got {days}"
                )
            }
            Self::InvalidEmail(value) => write!(f, "invalid email address: `{value}`"),
            Self::InvalidProfileUrl(value) => {
                write!(f, "profile url must start with http:// or https://, got `{value}`")
            }
        }
    }
}

impl Error for ValidationError {}
