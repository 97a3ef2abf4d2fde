//! Application-root coordinator for the navigation engine.
//!
//! The [`Navigator`] owns the menu store and the expansion state and is
//! the single mutation surface the shell talks to. For a route change
//! it resolves the active node first, then issues the auto-expand
//! toggles; the caller evaluates the responsive policy afterwards for
//! the render pass. Everything runs synchronously on the event thread,
//! so a render only ever observes completed transitions.

use corbel_types::MenuVariant;
use tracing::debug;

use crate::policy::{self, PolicyDecision};
use crate::resolve::{ResolverResult, resolve};
use crate::state::{Effect, ExpansionState, Msg};
use crate::store::{ConfigError, MenuStore, NavTree};

/// Owns the menu trees and the session's expansion state.
#[derive(Debug)]
pub struct Navigator {
    store: MenuStore,
    state: ExpansionState,
    title_suffix: String,
}

impl Navigator {
    /// Creates a navigator over an already-loaded store.
    ///
    /// `title_suffix` is appended to the active page title when the
    /// document-title effect is emitted (e.g., a site name).
    pub fn new(store: MenuStore, title_suffix: impl Into<String>) -> Self {
        Self {
            store,
            state: ExpansionState::new(),
            title_suffix: title_suffix.into(),
        }
    }

    /// Creates a navigator from the menu documents embedded in the
    /// crate. Fails on an invalid document; the shell must not start
    /// with a broken tree.
    pub fn with_embedded_menu(title_suffix: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self::new(MenuStore::from_embedded_config()?, title_suffix))
    }

    /// Read-only view of the expansion state for the renderer.
    pub fn state(&self) -> &ExpansionState {
        &self.state
    }

    /// The loaded menu store.
    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    /// The tree the sidebar currently displays, as picked by the
    /// compact-layout flag.
    pub fn active_tree(&self) -> &NavTree {
        self.store.tree(self.active_variant())
    }

    fn active_variant(&self) -> MenuVariant {
        if self.state.compact_layout() {
            MenuVariant::Compact
        } else {
            MenuVariant::Full
        }
    }

    /// Resolves a path without touching any state.
    ///
    /// Resolution always runs against the full tree so the breadcrumb
    /// and title stay stable across layout variants.
    pub fn resolve_route(&self, current_path: &str) -> ResolverResult<'_> {
        resolve(self.store.tree(MenuVariant::Full), current_path)
    }

    /// Processes a route change: resolves the active node, emits the
    /// document-title effect, then fires the auto-expand toggles for
    /// branches whose id appears in the path.
    pub fn handle_route_change(&mut self, current_path: &str) -> (ResolverResult<'_>, Vec<Effect>) {
        let mut effects = Vec::new();
        let result = resolve(self.store.tree(MenuVariant::Full), current_path);
        if let Some(title) = result.active_title() {
            effects.push(Effect::SetDocumentTitle(format!(
                "{title} {}",
                self.title_suffix
            )));
        }
        let variant = self.active_variant();
        self.state
            .auto_expand_for_path(self.store.tree(variant), current_path);
        (result, effects)
    }

    /// Forwards a transition message to the state machine.
    ///
    /// Node-addressed messages are checked against the displayed tree
    /// first; an unknown id is absorbed as a no-op with a diagnostic.
    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let node_id = match &msg {
            Msg::ToggleNode { id, .. } | Msg::SetNodeTrigger { id, .. } => Some(id),
            _ => None,
        };
        if let Some(id) = node_id {
            if !self.active_tree().contains_id(id) {
                debug!(%id, "ignoring message for unknown menu node");
                return Vec::new();
            }
        }
        self.state.update(msg)
    }

    /// Processes a viewport resize (and layout mount).
    ///
    /// Widths in the forced-close band close the mobile menu no matter
    /// its prior state; the close goes through the regular reducer so
    /// the message protocol stays the only writer.
    pub fn handle_resize(&mut self, viewport_width: u32) -> Vec<Effect> {
        let decision = policy::evaluate(viewport_width, &self.state);
        let mut effects = Vec::new();
        if decision.force_close_mobile && self.state.mobile_menu_open() {
            effects.extend(self.state.update(Msg::ToggleMobileMenu));
        }
        effects.push(Effect::SetCompactRootFlag(decision.compact_root_flag));
        effects
    }

    /// Reports that a terminal item was selected.
    ///
    /// On narrow viewports navigating implicitly toggles the overlay
    /// shut; the item is only reachable while the overlay is open.
    pub fn item_selected(&mut self, viewport_width: u32) -> Vec<Effect> {
        let decision = policy::evaluate(viewport_width, &self.state);
        if decision.close_menu_on_navigate {
            return self.state.update(Msg::ToggleMobileMenu);
        }
        Vec::new()
    }

    /// Evaluates the responsive policy for the current state.
    pub fn evaluate_policy(&self, viewport_width: u32) -> PolicyDecision {
        policy::evaluate(viewport_width, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::SidebarMode;
    use crate::state::NodeScope;

    const SUFFIX: &str = "| Corbel Admin";

    fn navigator() -> Navigator {
        Navigator::with_embedded_menu(SUFFIX).expect("embedded menus load")
    }

    #[test]
    fn route_change_emits_title_and_expands_branch() {
        let mut nav = navigator();
        let (result, effects) = nav.handle_route_change("/admin/users");
        assert_eq!(result.active_item.map(|n| n.id()), Some("users-list"));
        assert_eq!(
            effects,
            vec![Effect::SetDocumentTitle(format!("User list {SUFFIX}"))]
        );
        // "users" appears as a path segment, so the branch opened.
        assert!(nav.state().is_open("users"));
    }

    #[test]
    fn unresolved_route_emits_no_title() {
        let mut nav = navigator();
        let (result, effects) = nav.handle_route_change("/auth/login");
        assert!(result.active_item.is_none());
        assert!(effects.is_empty());
    }

    #[test]
    fn dispatch_ignores_unknown_node_ids() {
        let mut nav = navigator();
        let effects = nav.dispatch(Msg::ToggleNode {
            id: "not-a-node".into(),
            scope: NodeScope::Main,
        });
        assert!(effects.is_empty());
        assert!(!nav.state().is_open("not-a-node"));
        assert_eq!(nav.state().open_ids().count(), 0);
    }

    #[test]
    fn dispatch_validates_against_displayed_tree() {
        let mut nav = navigator();
        nav.dispatch(Msg::SetCompactLayout(true));
        // "products" exists only in the full document, which is not
        // displayed while the compact layout is on.
        nav.dispatch(Msg::ToggleNode {
            id: "products".into(),
            scope: NodeScope::Main,
        });
        assert!(!nav.state().is_open("products"));
        nav.dispatch(Msg::ToggleNode {
            id: "users".into(),
            scope: NodeScope::Main,
        });
        assert!(nav.state().is_open("users"));
    }

    #[test]
    fn resolution_uses_full_tree_even_in_compact_layout() {
        let mut nav = navigator();
        nav.dispatch(Msg::SetCompactLayout(true));
        let result = nav.resolve_route("/admin/products");
        assert_eq!(result.active_item.map(|n| n.id()), Some("products-list"));
    }

    #[test]
    fn resize_into_band_force_closes_mobile_menu() {
        let mut nav = navigator();
        nav.dispatch(Msg::ToggleMobileMenu);
        assert!(nav.state().mobile_menu_open());

        let effects = nav.handle_resize(1000);
        assert!(!nav.state().mobile_menu_open());
        assert_eq!(effects, vec![Effect::SetCompactRootFlag(false)]);
    }

    #[test]
    fn resize_outside_band_leaves_mobile_menu_alone() {
        let mut nav = navigator();
        nav.dispatch(Msg::ToggleMobileMenu);
        nav.handle_resize(800);
        assert!(nav.state().mobile_menu_open());
        assert!(nav.evaluate_policy(800).overlay_visible);
    }

    #[test]
    fn resize_reports_compact_root_flag() {
        let mut nav = navigator();
        nav.dispatch(Msg::SetCompactLayout(true));
        assert_eq!(
            nav.handle_resize(1400),
            vec![Effect::SetCompactRootFlag(true)]
        );
        assert_eq!(nav.evaluate_policy(1400).sidebar, SidebarMode::IconOnly);
    }

    #[test]
    fn selecting_item_on_narrow_viewport_closes_overlay() {
        let mut nav = navigator();
        nav.dispatch(Msg::ToggleMobileMenu);
        nav.item_selected(800);
        assert!(!nav.state().mobile_menu_open());
        // Wide viewports navigate without touching the flag.
        nav.dispatch(Msg::ToggleMobileMenu);
        nav.item_selected(1400);
        assert!(nav.state().mobile_menu_open());
    }

    #[test]
    fn repeated_route_change_reflips_auto_expanded_branch() {
        let mut nav = navigator();
        nav.handle_route_change("/admin/users");
        assert!(nav.state().is_open("users"));
        nav.handle_route_change("/admin/users");
        assert!(!nav.state().is_open("users"));
    }
}
