//! Loading and validation of the static menu trees.
//!
//! The menu documents are hand-authored configuration embedded into the
//! binary. They are validated once at startup and immutable afterwards;
//! a document that violates the structural invariants is fatal, because
//! the shell must not render from a broken tree.

use std::collections::HashSet;

use corbel_types::{MenuConfig, MenuVariant, NavNode};
use thiserror::Error;

/// Maximum nesting depth accepted at load time.
///
/// Real menus are two or three levels deep; the guard exists so that a
/// hand-edit which accidentally produces pathological nesting fails at
/// startup instead of during traversal.
pub const MAX_TREE_DEPTH: usize = 8;

const EMBEDDED_MENU: &str = include_str!("../config/menu.json");
const EMBEDDED_MENU_COMPACT: &str = include_str!("../config/menu-compact.json");

/// Errors raised while loading a menu document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("duplicate menu id: {id}")]
    DuplicateId { id: String },

    #[error("collapse node has no children: {id}")]
    EmptyChildren { id: String },

    #[error("menu nesting exceeds {max} levels at node: {id}")]
    TooDeep { id: String, max: usize },

    #[error("invalid menu document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A validated, immutable navigation tree.
///
/// Construction goes through [`NavTree::load`], which enforces the
/// structural invariants (globally unique ids, non-empty collapse
/// children, bounded depth). No mutation is exposed afterwards.
#[derive(Debug, Clone)]
pub struct NavTree {
    items: Vec<NavNode>,
}

impl NavTree {
    /// Validates `config` and wraps it as an immutable tree.
    pub fn load(config: MenuConfig) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        validate_nodes(&config.items, 1, &mut seen)?;
        Ok(Self {
            items: config.items,
        })
    }

    /// Parses and validates a JSON menu document.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: MenuConfig = serde_json::from_str(document)?;
        Self::load(config)
    }

    /// Root-level nodes in display order.
    pub fn items(&self) -> &[NavNode] {
        &self.items
    }

    /// Pre-order traversal over every node in the tree.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            stack: self.items.iter().rev().collect(),
        }
    }

    /// Whether a node with `id` exists anywhere in the tree.
    pub fn contains_id(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Finds a node by id.
    pub fn find(&self, id: &str) -> Option<&NavNode> {
        self.preorder().find(|node| node.id() == id)
    }
}

/// Iterator yielding tree nodes in pre-order (document order).
#[derive(Debug)]
pub struct Preorder<'t> {
    stack: Vec<&'t NavNode>,
}

impl<'t> Iterator for Preorder<'t> {
    type Item = &'t NavNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let NavNode::Collapse(collapse) = node {
            self.stack.extend(collapse.children.iter().rev());
        }
        Some(node)
    }
}

fn validate_nodes<'t>(
    nodes: &'t [NavNode],
    depth: usize,
    seen: &mut HashSet<&'t str>,
) -> Result<(), ConfigError> {
    for node in nodes {
        if !seen.insert(node.id()) {
            return Err(ConfigError::DuplicateId {
                id: node.id().to_string(),
            });
        }
        if let NavNode::Collapse(collapse) = node {
            if collapse.children.is_empty() {
                return Err(ConfigError::EmptyChildren {
                    id: collapse.id.clone(),
                });
            }
            if depth >= MAX_TREE_DEPTH {
                return Err(ConfigError::TooDeep {
                    id: collapse.id.clone(),
                    max: MAX_TREE_DEPTH,
                });
            }
            validate_nodes(&collapse.children, depth + 1, seen)?;
        }
    }
    Ok(())
}

/// Holds both configured menu documents for the process lifetime.
#[derive(Debug, Clone)]
pub struct MenuStore {
    full: NavTree,
    compact: NavTree,
}

impl MenuStore {
    /// Builds a store from two already-validated trees.
    pub fn new(full: NavTree, compact: NavTree) -> Self {
        Self { full, compact }
    }

    /// Loads the menu documents embedded in the crate.
    pub fn from_embedded_config() -> Result<Self, ConfigError> {
        Ok(Self::new(
            NavTree::from_json(EMBEDDED_MENU)?,
            NavTree::from_json(EMBEDDED_MENU_COMPACT)?,
        ))
    }

    /// Returns the tree for the requested layout variant.
    pub fn tree(&self, variant: MenuVariant) -> &NavTree {
        match variant {
            MenuVariant::Full => &self.full,
            MenuVariant::Compact => &self.compact,
        }
    }
}
