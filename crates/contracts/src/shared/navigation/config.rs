//! Build-time menu definition.

use super::filter::{filter_nav_tree_with, SessionFlags, PROVIDER_MENU_LABELS};
use super::node::NavNode;
use crate::shared::access::AccessEvaluator;
use anyhow::Context;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavMenuConfig {
    #[serde(default = "default_provider_allow_list")]
    pub provider_allow_list: Vec<String>,
    #[serde(default)]
    pub items: Vec<NavNode>,
}

fn default_provider_allow_list() -> Vec<String> {
    PROVIDER_MENU_LABELS.iter().map(|s| s.to_string()).collect()
}

/// Default menu embedded in the binary
pub const DEFAULT_NAV_CONFIG: &str = r#"
provider_allow_list = ["Home", "Services", "Orders", "Gallery"]

[[items]]
label = "Home"
to = "home"
icon = "home"

[[items]]
label = "Services"
icon = "layers"

[[items.children]]
label = "Service Categories"
to = "service_categories"
icon = "list"
permission_key = "Service Category"

[[items.children]]
label = "Services"
to = "services"
icon = "package"
permission_key = "Services"

[[items]]
label = "Orders"
to = "orders"
icon = "file-text"
permission_key = "Orders"

[[items]]
label = "Gallery"
to = "gallery"
icon = "image"
permission_key = "Gallery"

[[items]]
label = "Administration"
icon = "settings"

[[items.children]]
label = "Admin Roles"
to = "admin_roles"
icon = "shield"
permission_key = "Admin Role"

[[items.children]]
label = "Users"
to = "users"
icon = "users"
permission_key = "Users"
"#;

static DEFAULT_MENU: Lazy<NavMenuConfig> = Lazy::new(|| match parse_nav_config(DEFAULT_NAV_CONFIG) {
    Ok(config) => config,
    Err(e) => {
        log::error!("embedded navigation config is invalid: {:#}", e);
        NavMenuConfig {
            provider_allow_list: default_provider_allow_list(),
            items: vec![NavNode::leaf("Home", "home")],
        }
    }
});

pub fn parse_nav_config(source: &str) -> anyhow::Result<NavMenuConfig> {
    toml::from_str(source).context("Failed to parse navigation config")
}

/// Parses an override document when given, otherwise returns the embedded menu.
pub fn load_nav_config(source: Option<&str>) -> anyhow::Result<NavMenuConfig> {
    match source {
        Some(source) => parse_nav_config(source),
        None => Ok(NavMenuConfig::default_menu().clone()),
    }
}

impl NavMenuConfig {
    pub fn default_menu() -> &'static NavMenuConfig {
        &DEFAULT_MENU
    }

    /// Override document if it parses, embedded menu otherwise.
    pub fn load_or_default(source: Option<&str>) -> NavMenuConfig {
        load_nav_config(source).unwrap_or_else(|e| {
            log::warn!("{:#}; using default navigation", e);
            Self::default_menu().clone()
        })
    }

    pub fn visible_items(&self, evaluator: &AccessEvaluator, flags: SessionFlags) -> Vec<NavNode> {
        filter_nav_tree_with(&self.items, evaluator, flags, &self.provider_allow_list)
    }

    /// Finds a leaf by route key anywhere in the tree.
    pub fn find_route(&self, route: &str) -> Option<&NavNode> {
        self.items
            .iter()
            .flat_map(NavNode::leaves)
            .find(|leaf| leaf.route.as_deref() == Some(route))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::access::{Grant, GrantIndex};

    #[test]
    fn test_default_config_loads() {
        let config = parse_nav_config(DEFAULT_NAV_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.items.len(), 5);
        assert_eq!(config.items[0].label, "Home");
        assert!(config.items[0].permission_key.is_none());
        assert!(config.items[1].is_group());
        assert_eq!(config, *NavMenuConfig::default_menu());
    }

    #[test]
    fn test_find_route() {
        let menu = NavMenuConfig::default_menu();
        let leaf = menu.find_route("admin_roles").unwrap();
        assert_eq!(leaf.permission_key.as_deref(), Some("Admin Role"));
        assert!(menu.find_route("missing").is_none());
    }

    #[test]
    fn test_override_falls_back_on_error() {
        let config = NavMenuConfig::load_or_default(Some("items = 5"));
        assert_eq!(config, *NavMenuConfig::default_menu());
        assert!(load_nav_config(Some("items = 5")).is_err());
    }

    #[test]
    fn test_override_without_allow_list_uses_builtin() {
        let config = load_nav_config(Some(
            r#"
            [[items]]
            label = "Home"
            to = "home"
            "#,
        ))
        .unwrap();
        assert_eq!(config.provider_allow_list, default_provider_allow_list());
        assert_eq!(config.items, vec![NavNode::leaf("Home", "home")]);
    }

    #[test]
    fn test_visible_items_for_provider_session() {
        let eval = AccessEvaluator::new(GrantIndex::build(&[
            Grant::new("Services", "view"),
            Grant::new("Users", "all"),
        ]));
        let menu = NavMenuConfig::default_menu();

        let provider = menu.visible_items(&eval, SessionFlags { provider_only: true });
        let labels: Vec<&str> = provider.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Services"]);

        let admin = menu.visible_items(&eval, SessionFlags::default());
        let labels: Vec<&str> = admin.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Services", "Administration"]);
    }
}
