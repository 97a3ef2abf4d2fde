//! Expansion state machine for the sidebar and header menus.
//!
//! All menu UI state lives in [`ExpansionState`] and is mutated only
//! through [`ExpansionState::update`] with a [`Msg`]. The state is
//! created once at application start, owned by the
//! [`Navigator`](crate::navigator::Navigator), and threaded explicitly
//! into whatever needs it; there is no ambient global.

use corbel_types::NavNode;
use indexmap::IndexSet;
use tracing::debug;

use crate::store::NavTree;

/// Whether a toggled collapse node sits at the root of the tree or
/// nested inside another collapse.
///
/// The distinction is informational (diagnostics, styling hooks);
/// membership in the open set is tracked in one flat set regardless of
/// nesting, so independently nested branches stay open side by side.
/// This is not an accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeScope {
    /// Root-level collapse node.
    Main,
    /// Collapse node nested inside another collapse.
    Sub,
}

/// Messages that mutate the expansion state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Flip the off-canvas mobile menu open/closed.
    ToggleMobileMenu,
    /// Set the condensed header's option menu to the given value. The
    /// toggler computes `!current` before sending; the message carries
    /// the target value, not a bare toggle request.
    ToggleHeaderMenu(bool),
    /// Set the condensed header's tab dropdown to the given value.
    ToggleTabMenu(bool),
    /// Flip membership of a collapse node in the open set.
    ToggleNode { id: String, scope: NodeScope },
    /// Mark or clear a node as hover/focus-activated.
    SetNodeTrigger { id: String, active: bool },
    /// Switch the icon-only ("compact") sidebar layout on or off.
    SetCompactLayout(bool),
}

/// External effects requested by the engine.
///
/// State updates stay pure; the hosting shell consumes these and
/// performs the actual side effects (document title, root styling).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Set the document/page title.
    SetDocumentTitle(String),
    /// Flag or unflag the global compact visual mode on the document
    /// root for styling purposes.
    SetCompactRootFlag(bool),
}

/// Session-scoped menu UI state.
///
/// Fields are private by contract: every mutation goes through
/// [`ExpansionState::update`], so renders only ever observe the result
/// of a completed transition.
#[derive(Debug, Default, Clone)]
pub struct ExpansionState {
    open: IndexSet<String>,
    trigger: IndexSet<String>,
    mobile_menu_open: bool,
    header_menu_open: bool,
    tab_menu_open: bool,
    compact_layout: bool,
}

impl ExpansionState {
    /// Fresh state: everything closed, nothing expanded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the collapse node `id` is currently expanded.
    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Whether the node `id` is currently hover/focus-activated.
    pub fn is_triggered(&self, id: &str) -> bool {
        self.trigger.contains(id)
    }

    /// Ids of the currently expanded collapse nodes.
    pub fn open_ids(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }

    /// Whether the off-canvas mobile menu is visible.
    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Whether the condensed header's option menu is visible.
    pub fn header_menu_open(&self) -> bool {
        self.header_menu_open
    }

    /// Whether the condensed header's tab dropdown is visible.
    pub fn tab_menu_open(&self) -> bool {
        self.tab_menu_open
    }

    /// Whether the sidebar is in icon-only layout.
    pub fn compact_layout(&self) -> bool {
        self.compact_layout
    }

    /// Applies a transition message and returns any requested effects.
    ///
    /// Transitions are synchronous and atomic; invalid input never
    /// panics. An id unknown to the tree is filtered out earlier by the
    /// navigator, so the reducer itself stays tree-agnostic.
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::ToggleMobileMenu => {
                self.mobile_menu_open = !self.mobile_menu_open;
            }
            Msg::ToggleHeaderMenu(open) => {
                self.header_menu_open = open;
            }
            Msg::ToggleTabMenu(open) => {
                self.tab_menu_open = open;
            }
            Msg::ToggleNode { id, scope } => {
                if self.open.shift_remove(&id) {
                    debug!(%id, ?scope, "collapsed menu node");
                } else {
                    debug!(%id, ?scope, "expanded menu node");
                    self.open.insert(id);
                }
            }
            Msg::SetNodeTrigger { id, active } => {
                if active {
                    self.trigger.insert(id);
                } else {
                    self.trigger.shift_remove(&id);
                }
            }
            Msg::SetCompactLayout(value) => {
                self.compact_layout = value;
            }
        }
        Vec::new()
    }

    /// Auto-expands branches whose id appears in the current path.
    ///
    /// Each collapse node is checked independently against the literal
    /// `/`-separated segments of `current_path`; a node whose own id
    /// shows up as a segment gets a `ToggleNode`, whether or not it is
    /// the resolver's declared ancestor. The toggle keeps its flip
    /// semantics, so firing again for the same route closes the branch
    /// back up.
    pub fn auto_expand_for_path(&mut self, tree: &NavTree, current_path: &str) {
        let segments: Vec<&str> = current_path.split('/').collect();
        self.auto_expand_nodes(tree.items(), NodeScope::Main, &segments);
    }

    fn auto_expand_nodes(&mut self, nodes: &[NavNode], scope: NodeScope, segments: &[&str]) {
        for node in nodes {
            let NavNode::Collapse(collapse) = node else {
                continue;
            };
            if segments.iter().any(|segment| *segment == collapse.id) {
                let _ = self.update(Msg::ToggleNode {
                    id: collapse.id.clone(),
                    scope,
                });
            }
            self.auto_expand_nodes(&collapse.children, NodeScope::Sub, segments);
        }
    }
}
