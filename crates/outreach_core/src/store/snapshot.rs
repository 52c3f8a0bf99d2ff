//! Serializable copy of all store collections.

use crate::model::communication::Communication;
use crate::model::company::Company;
use crate::model::method::{seed_communication_methods, CommunicationMethod};
use serde::{Deserialize, Serialize};

/// Whole-store snapshot used for import/export.
///
/// A snapshot without a `communication_methods` field gets the seed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub communications: Vec<Communication>,
    #[serde(default = "seed_communication_methods")]
    pub communication_methods: Vec<CommunicationMethod>,
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            companies: Vec::new(),
            communications: Vec::new(),
            communication_methods: seed_communication_methods(),
        }
    }
}
