//! Pruning of the navigation tree to what the current session may open.

use super::node::NavNode;
use crate::shared::access::{Action, AccessEvaluator};
use serde::{Deserialize, Serialize};

/// Top-level labels a provider-only session may ever see.
pub const PROVIDER_MENU_LABELS: &[&str] = &["Home", "Services", "Orders", "Gallery"];

/// Coarse session-level restrictions applied before per-item permissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFlags {
    #[serde(default)]
    pub provider_only: bool,
}

/// Filters `tree` with the built-in provider allow-list.
pub fn filter_nav_tree(
    tree: &[NavNode],
    evaluator: &AccessEvaluator,
    flags: SessionFlags,
) -> Vec<NavNode> {
    filter_nav_tree_with(tree, evaluator, flags, PROVIDER_MENU_LABELS)
}

/// Filters `tree` for the session.
///
/// With `provider_only` set, the top level is first narrowed to
/// `provider_allow_list`; the permission pass then runs on what is left.
/// Order is preserved and groups that end up empty are dropped.
pub fn filter_nav_tree_with<S: AsRef<str>>(
    tree: &[NavNode],
    evaluator: &AccessEvaluator,
    flags: SessionFlags,
    provider_allow_list: &[S],
) -> Vec<NavNode> {
    tree.iter()
        .filter(|node| {
            !flags.provider_only
                || provider_allow_list
                    .iter()
                    .any(|label| label.as_ref() == node.label)
        })
        .filter_map(|node| filter_node(node, evaluator))
        .collect()
}

fn filter_node(node: &NavNode, evaluator: &AccessEvaluator) -> Option<NavNode> {
    match &node.children {
        Some(children) => {
            let visible: Vec<NavNode> = children
                .iter()
                .filter_map(|child| filter_node(child, evaluator))
                .collect();
            if visible.is_empty() {
                return None;
            }
            Some(NavNode {
                children: Some(visible),
                ..node.clone()
            })
        }
        None => {
            let allowed = match node.permission_key.as_deref() {
                None => true,
                Some(key) => evaluator.can_perform(key, Action::View.as_str()),
            };
            allowed.then(|| node.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::access::{Grant, GrantIndex};

    fn evaluator(grants: &[Grant]) -> AccessEvaluator {
        AccessEvaluator::new(GrantIndex::build(grants))
    }

    fn sample_tree() -> Vec<NavNode> {
        vec![
            NavNode::leaf("Home", "/"),
            NavNode::group(
                "Administration",
                vec![
                    NavNode::leaf("Admin Roles", "/roles").with_permission("Admin Role"),
                    NavNode::leaf("Users", "/users").with_permission("Users"),
                ],
            ),
            NavNode::group(
                "Content",
                vec![
                    NavNode::leaf("Gallery", "/gallery").with_permission("Gallery"),
                    NavNode::group(
                        "Banners",
                        vec![NavNode::leaf("Home Banners", "/banners").with_permission("Banner")],
                    ),
                ],
            ),
            NavNode::leaf("Services", "/services").with_permission("Services"),
        ]
    }

    fn labels(nodes: &[NavNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.label.as_str()).collect()
    }

    fn assert_no_empty_groups(nodes: &[NavNode]) {
        for node in nodes {
            if let Some(children) = &node.children {
                assert!(!children.is_empty(), "empty group {}", node.label);
                assert_no_empty_groups(children);
            }
        }
    }

    #[test]
    fn test_deny_all_keeps_only_public_leaves() {
        let visible = filter_nav_tree(&sample_tree(), &AccessEvaluator::deny_all(), SessionFlags::default());
        assert_eq!(labels(&visible), vec!["Home"]);
    }

    #[test]
    fn test_group_kept_with_only_visible_children() {
        let eval = evaluator(&[Grant::new("Users", "view"), Grant::new("Admin Role", "edit")]);
        let visible = filter_nav_tree(&sample_tree(), &eval, SessionFlags::default());

        assert_eq!(labels(&visible), vec!["Home", "Administration"]);
        let admin = visible[1].children.as_ref().unwrap();
        assert_eq!(labels(admin), vec!["Users"]);
        assert_no_empty_groups(&visible);
    }

    #[test]
    fn test_nested_groups_are_pruned_bottom_up() {
        let eval = evaluator(&[Grant::new("Banner", "all")]);
        let visible = filter_nav_tree(&sample_tree(), &eval, SessionFlags::default());

        assert_eq!(labels(&visible), vec!["Home", "Content"]);
        let content = visible[1].children.as_ref().unwrap();
        assert_eq!(labels(content), vec!["Banners"]);
        assert_no_empty_groups(&visible);
    }

    #[test]
    fn test_empty_declared_group_is_dropped() {
        let tree = vec![NavNode::group("Empty", vec![]), NavNode::leaf("Home", "/")];
        let visible = filter_nav_tree(&tree, &AccessEvaluator::deny_all(), SessionFlags::default());
        assert_eq!(labels(&visible), vec!["Home"]);
    }

    #[test]
    fn test_provider_only_narrows_before_permissions() {
        let eval = evaluator(&[
            Grant::new("Users", "view"),
            Grant::new("Gallery", "view"),
            Grant::new("Services", "view"),
        ]);
        let flags = SessionFlags { provider_only: true };
        let visible = filter_nav_tree(&sample_tree(), &eval, flags);

        // "Administration" is granted but not on the allow-list; "Content" is
        // not on the allow-list even though its Gallery child is granted.
        assert_eq!(labels(&visible), vec!["Home", "Services"]);
    }

    #[test]
    fn test_provider_allow_list_does_not_bypass_permissions() {
        let flags = SessionFlags { provider_only: true };
        let visible = filter_nav_tree_with(
            &sample_tree(),
            &AccessEvaluator::deny_all(),
            flags,
            &["Home", "Services", "Administration"],
        );
        assert_eq!(labels(&visible), vec!["Home"]);
    }

    #[test]
    fn test_filter_is_deterministic() {
        let eval = evaluator(&[Grant::new("Gallery", "view"), Grant::new("Users", "view")]);
        let first = filter_nav_tree(&sample_tree(), &eval, SessionFlags::default());
        let second = filter_nav_tree(&sample_tree(), &eval, SessionFlags::default());
        assert_eq!(first, second);
        assert_eq!(filter_nav_tree(&first, &eval, SessionFlags::default()), first);
    }
}
