//! Permission index built once per session from the raw grant list.

use super::action::{normalize_action, WILDCARD_ACTION};
use super::error::AccessError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeSet, HashMap, HashSet};

/// One granted `{module, action}` pair as delivered by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grant {
    pub module: String,
    pub action: String,
}

impl Grant {
    pub fn new(module: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            action: action.into(),
        }
    }
}

/// Lenient shape used while reading untrusted payloads.
#[derive(Debug, Default, Deserialize)]
struct RawGrant {
    #[serde(default)]
    module: Option<String>,
    #[serde(default)]
    action: Option<String>,
}

/// Module name → set of normalized action names.
///
/// Module names are kept as the server spells them (case-sensitive, spaces
/// allowed); only surrounding whitespace is removed. Action names are always
/// trimmed and lower-case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantIndex {
    modules: HashMap<String, HashSet<String>>,
}

impl GrantIndex {
    /// Builds the index, skipping entries with an empty module or action.
    pub fn build<'a, I>(grants: I) -> Self
    where
        I: IntoIterator<Item = &'a Grant>,
    {
        let mut index = Self::default();
        for grant in grants {
            index.insert(&grant.module, &grant.action);
        }
        index
    }

    /// Reads a JSON grant list. `null`, non-array payloads and invalid JSON are
    /// rejected; malformed entries inside a valid array are skipped.
    pub fn from_json(source: &str) -> Result<Self, AccessError> {
        let value: Value = serde_json::from_str(source)
            .map_err(|e| AccessError::MalformedGrantData(e.to_string()))?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, AccessError> {
        let entries = match value {
            Value::Array(entries) => entries,
            Value::Null => {
                return Err(AccessError::MalformedGrantData(
                    "grant list is null".to_string(),
                ))
            }
            other => {
                return Err(AccessError::MalformedGrantData(format!(
                    "expected an array of grants, got {}",
                    json_kind(other)
                )))
            }
        };

        let mut index = Self::default();
        let mut skipped = 0usize;
        for entry in entries {
            let raw = RawGrant::deserialize(entry).unwrap_or_default();
            match (raw.module, raw.action) {
                (Some(module), Some(action)) if index.insert(&module, &action) => {}
                _ => skipped += 1,
            }
        }
        if skipped > 0 {
            log::debug!("grant index: skipped {} malformed grant entries", skipped);
        }
        Ok(index)
    }

    fn insert(&mut self, module: &str, action: &str) -> bool {
        let module = module.trim();
        let action = normalize_action(action);
        if module.is_empty() || action.is_empty() {
            return false;
        }
        self.modules
            .entry(module.to_string())
            .or_default()
            .insert(action);
        true
    }

    /// True iff `action` or the wildcard is granted on `module`.
    pub fn query(&self, module: &str, action: &str) -> bool {
        let Some(actions) = self.modules.get(module.trim()) else {
            return false;
        };
        actions.contains(WILDCARD_ACTION) || actions.contains(&normalize_action(action))
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Module names in sorted order.
    pub fn modules(&self) -> BTreeSet<&str> {
        self.modules.keys().map(String::as_str).collect()
    }

    /// Normalized actions granted on `module`, sorted.
    pub fn actions(&self, module: &str) -> BTreeSet<&str> {
        self.modules
            .get(module.trim())
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
