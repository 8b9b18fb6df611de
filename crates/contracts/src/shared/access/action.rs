//! Action vocabulary and typed permission pairs.
//!
//! Grants arrive from the server as free-form `{module, action}` strings, but
//! code inside the console never builds permission checks from strings: call
//! sites construct a [`Permission`] from a module key and an [`Action`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wildcard action: a module granted `"all"` is granted every action.
pub const WILDCARD_ACTION: &str = "all";

/// Canonical UI actions gated by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Add,
    Edit,
    Delete,
    Status,
    View,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Add,
        Action::Edit,
        Action::Delete,
        Action::Status,
        Action::View,
    ];

    /// Normalized (lower-case) name as stored in a grant index.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Status => "status",
            Action::View => "view",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_action(s);
        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == normalized)
            .ok_or(())
    }
}

/// A `{module, action}` pair built at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    pub module: String,
    pub action: Action,
}

impl Permission {
    pub fn new(module: impl Into<String>, action: Action) -> Self {
        Self {
            module: module.into(),
            action,
        }
    }

    pub fn view(module: impl Into<String>) -> Self {
        Self::new(module, Action::View)
    }
}

/// Actions are trimmed and lower-cased before they enter or query an index.
pub fn normalize_action(action: &str) -> String {
    action.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parse_is_case_insensitive() {
        assert_eq!("Delete".parse::<Action>(), Ok(Action::Delete));
        assert_eq!(" STATUS ".parse::<Action>(), Ok(Action::Status));
        assert!("export".parse::<Action>().is_err());
        assert!(WILDCARD_ACTION.parse::<Action>().is_err());
    }

    #[test]
    fn test_action_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Permission::view("Admin Role")).unwrap();
        assert_eq!(json, r#"{"module":"Admin Role","action":"view"}"#);
    }
}
