use serde::{Deserialize, Serialize};

/// Sentinel option value meaning "do not filter on this group".
pub const ALL_OPTION: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

/// A set of mutually exclusive options applied to the field at `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub key: String,
    pub label: String,
    pub options: Vec<FilterOption>,
}

impl FilterGroup {
    /// New group that starts with the `"all"` option.
    pub fn new(key: impl Into<String>, label: impl Into<String>, all_label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            options: vec![FilterOption {
                value: ALL_OPTION.to_string(),
                label: all_label.into(),
            }],
        }
    }

    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(FilterOption {
            value: value.into(),
            label: label.into(),
        });
        self
    }

    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}

/// True when `value` leaves a group inactive.
pub fn is_all_option(value: &str) -> bool {
    value.is_empty() || value == ALL_OPTION
}
