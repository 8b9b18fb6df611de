pub mod config;
pub mod filter;
pub mod node;

pub use config::{load_nav_config, NavMenuConfig, DEFAULT_NAV_CONFIG};
pub use filter::{filter_nav_tree, filter_nav_tree_with, SessionFlags, PROVIDER_MENU_LABELS};
pub use node::NavNode;
