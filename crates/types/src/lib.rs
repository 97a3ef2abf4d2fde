//! Shared navigation types for the Corbel admin shell.
//!
//! This crate defines the data model for the sidebar menu tree: the
//! two node shapes (`item` and `collapse`), the icon reference used by
//! the presentation layer, and the top-level document wrapper that the
//! hand-authored menu configuration deserializes into. The tree is
//! static configuration; nothing here is mutated at runtime.

use serde::{Deserialize, Serialize};

/// Reference to an icon glyph in the host application's icon sets.
///
/// The engine treats this as opaque metadata; only the renderer
/// interprets it (e.g., `{ "set": "remixicon", "name": "ri-user-line" }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRef {
    /// Icon set the glyph belongs to (e.g., "remixicon").
    pub set: String,
    /// Glyph name within the set (e.g., "ri-dashboard-line").
    pub name: String,
}

/// A single node of the navigation tree.
///
/// The wire shape is a tagged object: `"type": "item"` for terminal,
/// navigable leaves and `"type": "collapse"` for togglable branches
/// with children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavNode {
    /// Terminal, navigable leaf.
    Item(NavItem),
    /// Branch node with children, togglable open/closed.
    Collapse(NavCollapse),
}

impl NavNode {
    /// Unique identifier of the node.
    pub fn id(&self) -> &str {
        match self {
            NavNode::Item(item) => &item.id,
            NavNode::Collapse(collapse) => &collapse.id,
        }
    }

    /// Display title of the node.
    pub fn title(&self) -> &str {
        match self {
            NavNode::Item(item) => &item.title,
            NavNode::Collapse(collapse) => &collapse.title,
        }
    }

    /// Navigation target, if the node has one. Collapse nodes may
    /// carry an optional self-link.
    pub fn url(&self) -> Option<&str> {
        match self {
            NavNode::Item(item) => Some(&item.url),
            NavNode::Collapse(collapse) => collapse.url.as_deref(),
        }
    }

    /// Icon reference, if configured.
    pub fn icon(&self) -> Option<&IconRef> {
        match self {
            NavNode::Item(item) => item.icon.as_ref(),
            NavNode::Collapse(collapse) => collapse.icon.as_ref(),
        }
    }

    /// Whether this is a collapse (branch) node.
    pub fn is_collapse(&self) -> bool {
        matches!(self, NavNode::Collapse(_))
    }
}

/// A terminal menu entry pointing at a route or external URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Identifier, unique across the whole tree.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Secondary line shown under the title in some layouts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Navigation target path (or absolute URL when `external`).
    pub url: String,
    /// Icon shown next to the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRef>,
    /// Link leaves the application (rendered with an external anchor).
    #[serde(default)]
    pub external: bool,
    /// Open the link in a new browsing target.
    #[serde(default)]
    pub target: bool,
    /// Route-matching mode for active-state resolution.
    ///
    /// Tri-state on purpose: only an explicit `false` restricts the
    /// item to exact-equality matching. Unset (the common case) and
    /// `true` both allow prefix matching, so `/admin/users` stays
    /// active on `/admin/users/42/edit`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,
}

/// A branch entry holding an ordered, non-empty list of children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavCollapse {
    /// Identifier, unique across the whole tree.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Secondary line shown under the title in some layouts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Icon shown next to the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRef>,
    /// Optional self-link: the branch header itself navigates here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Child nodes in declaration order. Must be non-empty; the store
    /// rejects empty branches at load time.
    pub children: Vec<NavNode>,
    /// Whether the breadcrumb trail is shown when a descendant (or the
    /// branch itself) is the active page. The page title is unaffected.
    #[serde(default = "default_true")]
    pub breadcrumbs: bool,
}

fn default_true() -> bool {
    true
}

/// Top-level shape of a hand-authored menu document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Root-level nodes in display order.
    pub items: Vec<NavNode>,
}

/// Which of the two configured menu documents to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuVariant {
    /// The complete menu, shown in the regular sidebar.
    #[default]
    Full,
    /// The reduced menu used by the icon-only ("compact") layout.
    Compact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_document_parses_with_defaults() {
        let doc = r#"{
            "id": "dashboard",
            "title": "Dashboard",
            "type": "item",
            "icon": { "set": "remixicon", "name": "ri-dashboard-line" },
            "url": "/admin/dashboard"
        }"#;
        let node: NavNode = serde_json::from_str(doc).expect("parse item node");
        let NavNode::Item(item) = node else {
            panic!("expected item variant");
        };
        assert_eq!(item.id, "dashboard");
        assert!(!item.external);
        assert!(!item.target);
        assert_eq!(item.exact, None);
        assert_eq!(item.subtitle, None);
    }

    #[test]
    fn collapse_document_defaults_breadcrumbs_on() {
        let doc = r#"{
            "id": "users",
            "title": "Users",
            "type": "collapse",
            "children": [
                { "id": "users-list", "title": "User list", "type": "item", "url": "/admin/users" }
            ]
        }"#;
        let node: NavNode = serde_json::from_str(doc).expect("parse collapse node");
        let NavNode::Collapse(collapse) = node else {
            panic!("expected collapse variant");
        };
        assert!(collapse.breadcrumbs);
        assert_eq!(collapse.children.len(), 1);
        assert_eq!(collapse.children[0].id(), "users-list");
    }

    #[test]
    fn explicit_exact_false_survives_round_trip() {
        let doc = r#"{ "id": "home", "title": "Home", "type": "item", "url": "/", "exact": false }"#;
        let node: NavNode = serde_json::from_str(doc).expect("parse");
        let NavNode::Item(ref item) = node else {
            panic!("expected item variant");
        };
        assert_eq!(item.exact, Some(false));
        let back = serde_json::to_value(&node).expect("serialize");
        assert_eq!(back["exact"], serde_json::json!(false));
    }

    #[test]
    fn unknown_type_tag_is_rejected() {
        let doc = r#"{ "id": "x", "title": "X", "type": "divider" }"#;
        assert!(serde_json::from_str::<NavNode>(doc).is_err());
    }

    #[test]
    fn node_accessors_cover_both_shapes() {
        let item = NavNode::Item(NavItem {
            id: "settings".into(),
            title: "Settings".into(),
            subtitle: None,
            url: "/admin/settings".into(),
            icon: None,
            external: false,
            target: false,
            exact: None,
        });
        assert_eq!(item.id(), "settings");
        assert_eq!(item.url(), Some("/admin/settings"));
        assert!(!item.is_collapse());

        let branch = NavNode::Collapse(NavCollapse {
            id: "system".into(),
            title: "System".into(),
            subtitle: None,
            icon: None,
            url: None,
            children: vec![item],
            breadcrumbs: true,
        });
        assert_eq!(branch.title(), "System");
        assert_eq!(branch.url(), None);
        assert!(branch.is_collapse());
    }
}
