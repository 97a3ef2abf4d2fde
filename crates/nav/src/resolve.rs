//! Active-route resolution over a navigation tree.
//!
//! Given the current path reported by the router, the resolver finds
//! the active node and its nearest enclosing collapse ancestor. The
//! search is a pre-order, first-match walk in document order: the first
//! node whose path condition holds wins, and siblings declared earlier
//! shadow later, more specific matches. "No match" is a valid result,
//! not an error; the breadcrumb and title simply render nothing.

use corbel_types::{NavCollapse, NavItem, NavNode};

use crate::store::NavTree;

/// Outcome of resolving the current path against a tree.
///
/// Borrows the tree; recomputed on every route change and never stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolverResult<'t> {
    /// The node considered active for the current path, if any. May be
    /// a collapse node when its self-link matched.
    pub active_item: Option<&'t NavNode>,
    /// Nearest collapse ancestor of the active item. `None` for
    /// root-level items and for collapse self-link matches.
    pub active_parent: Option<&'t NavCollapse>,
}

impl ResolverResult<'_> {
    /// Title of the active node, if one matched.
    pub fn active_title(&self) -> Option<&str> {
        self.active_item.map(NavNode::title)
    }
}

/// Resolves `current_path` to the active node and its parent.
pub fn resolve<'t>(tree: &'t NavTree, current_path: &str) -> ResolverResult<'t> {
    let mut result = ResolverResult::default();
    search(tree.items(), None, current_path, &mut result);
    result
}

fn search<'t>(
    nodes: &'t [NavNode],
    parent: Option<&'t NavCollapse>,
    current_path: &str,
    out: &mut ResolverResult<'t>,
) -> bool {
    for node in nodes {
        match node {
            NavNode::Item(item) => {
                if item_matches(item, current_path) {
                    out.active_item = Some(node);
                    out.active_parent = parent;
                    return true;
                }
            }
            NavNode::Collapse(collapse) => {
                // A branch with a self-link can itself be the active
                // page; it then reports no parent.
                if let Some(url) = collapse.url.as_deref() {
                    if current_path == url || current_path.starts_with(url) {
                        out.active_item = Some(node);
                        out.active_parent = None;
                        return true;
                    }
                }
                if search(&collapse.children, Some(collapse), current_path, out) {
                    return true;
                }
            }
        }
    }
    false
}

/// Path condition for an item node.
///
/// Note the polarity: only an explicit `exact: false` restricts the
/// item to exact equality. Unset and `true` both keep prefix matching
/// enabled, so a child route keeps its menu entry active.
fn item_matches(item: &NavItem, current_path: &str) -> bool {
    let item_path = item.url.as_str();
    current_path == item_path || (item.exact != Some(false) && current_path.starts_with(item_path))
}
