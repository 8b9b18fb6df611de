use serde::{Deserialize, Serialize};

/// One entry of the navigation tree.
///
/// Leaves have `children == None`. A leaf without a `permission_key` is always
/// shown (e.g. "Home"); a group is shown only while it keeps at least one
/// visible descendant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavNode {
    pub label: String,
    #[serde(default, rename = "to", alias = "route", skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, alias = "permissionKey", skip_serializing_if = "Option::is_none")]
    pub permission_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavNode>>,
}

impl NavNode {
    pub fn leaf(label: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            route: Some(route.into()),
            icon: None,
            permission_key: None,
            children: None,
        }
    }

    pub fn group(label: impl Into<String>, children: Vec<NavNode>) -> Self {
        Self {
            label: label.into(),
            route: None,
            icon: None,
            permission_key: None,
            children: Some(children),
        }
    }

    pub fn with_permission(mut self, key: impl Into<String>) -> Self {
        self.permission_key = Some(key.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn is_group(&self) -> bool {
        self.children.is_some()
    }

    /// Depth-first visit of all leaves in declaration order.
    pub fn leaves(&self) -> Vec<&NavNode> {
        match &self.children {
            None => vec![self],
            Some(children) => children.iter().flat_map(NavNode::leaves).collect(),
        }
    }
}
