//! Application security group model.
//!
//! Groups are read-only snapshots of what the platform returned. Rule order
//! and the key order inside each rule are kept exactly as received.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single network rule: an open-ended, insertion-ordered set of fields
/// (`protocol`, `destination`, `ports`, ...).
pub type SecurityRule = IndexMap<String, serde_json::Value>;

/// Identity of a space a group is bound to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceFields {
    pub guid: String,
    pub name: String,
}

impl SpaceFields {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            guid: String::new(),
            name: name.into(),
        }
    }
}

/// Application security group as seen by this client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSecurityGroup {
    /// Group name, unique within the org scope
    pub name: String,
    /// Opaque platform identifier
    pub guid: String,
    /// Rules in the order the platform returned them
    #[serde(default)]
    pub rules: Vec<SecurityRule>,
    /// Spaces the group is bound to
    #[serde(default)]
    pub spaces: Vec<SpaceFields>,
}

impl ApplicationSecurityGroup {
    /// Compact JSON rendering of the rules. An empty list renders as `[]`.
    pub fn rules_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(&self.rules)?)
    }

    /// Space names joined with `", "`, or `None` when the group is unbound.
    pub fn space_names(&self) -> Option<String> {
        if self.spaces.is_empty() {
            return None;
        }
        let names: Vec<&str> = self.spaces.iter().map(|s| s.name.as_str()).collect();
        Some(names.join(", "))
    }
}
