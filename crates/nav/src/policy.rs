//! Viewport-driven display policy.
//!
//! Pure derivations over `(viewport width, expansion state)`. The
//! policy decides how the sidebar presents itself and how a collapse
//! node's children are displayed; applying the decisions (CSS classes,
//! forced transitions) is the navigator's and the renderer's job.

use crate::state::ExpansionState;

/// Widths at or below this are the "narrow" (mobile) range: the
/// sidebar becomes a full overlay gated by the mobile-menu flag.
pub const NARROW_MAX_WIDTH: u32 = 1024;

/// Widths above this participate in the compact (icon-only) layout;
/// at or below it the compact layout falls back to regular behavior.
pub const COMPACT_MIN_WIDTH: u32 = 992;

/// How the sidebar presents at the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarMode {
    /// Regular expanded sidebar with inline nested lists.
    Inline,
    /// Icon-only sidebar; open branches show as flyouts.
    IconOnly,
    /// Off-canvas overlay on narrow viewports.
    Overlay,
}

/// How a collapse node's children are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildrenDisplay {
    /// Branch is closed; children are not rendered.
    Hidden,
    /// Children render as an inline nested list.
    Inline,
    /// Children render as a flyout next to the icon-only sidebar.
    Flyout,
}

/// Derived display decisions for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyDecision {
    /// Presentation mode of the sidebar.
    pub sidebar: SidebarMode,
    /// Narrow viewports only: whether the overlay is currently shown.
    pub overlay_visible: bool,
    /// Selecting a terminal item should close the mobile overlay as a
    /// side effect of navigating.
    pub close_menu_on_navigate: bool,
    /// The viewport landed in the band that force-closes the mobile
    /// menu on mount/resize, regardless of prior state.
    pub force_close_mobile: bool,
    /// The document root should carry the global compact styling flag.
    pub compact_root_flag: bool,
}

/// Derives the display decisions for the given viewport width.
pub fn evaluate(viewport_width: u32, state: &ExpansionState) -> PolicyDecision {
    let narrow = viewport_width <= NARROW_MAX_WIDTH;
    let sidebar = if narrow {
        SidebarMode::Overlay
    } else if state.compact_layout() {
        SidebarMode::IconOnly
    } else {
        SidebarMode::Inline
    };
    PolicyDecision {
        sidebar,
        overlay_visible: narrow && state.mobile_menu_open(),
        close_menu_on_navigate: narrow,
        force_close_mobile: viewport_width > COMPACT_MIN_WIDTH && viewport_width <= NARROW_MAX_WIDTH,
        compact_root_flag: state.compact_layout() && viewport_width > COMPACT_MIN_WIDTH,
    }
}

/// Derives how the children of collapse node `id` display.
///
/// A hover/focus trigger counts as open so the compact flyout can
/// appear without a click. Open/closed membership itself is preserved
/// across mode switches; compact mode only changes the presentation.
pub fn children_display(
    viewport_width: u32,
    state: &ExpansionState,
    id: &str,
) -> ChildrenDisplay {
    if !state.is_open(id) && !state.is_triggered(id) {
        return ChildrenDisplay::Hidden;
    }
    if viewport_width > NARROW_MAX_WIDTH && state.compact_layout() {
        ChildrenDisplay::Flyout
    } else {
        ChildrenDisplay::Inline
    }
}
