//! Destination catalog models.

use serde::{Deserialize, Serialize};

/// A travel destination, keyed by a store-assigned numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub location: String,
}

/// Per-field partial update. Absent fields keep their current value; there is
/// no dynamic attribute patching.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DestinationUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}
