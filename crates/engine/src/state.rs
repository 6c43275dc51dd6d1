//! Shared navigation state record.
//!
//! A single [`NavState`] is owned by the component instance for its whole
//! mount → unmount lifetime. Handlers mutate it on the host's
//! single-threaded event dispatch and must leave it internally consistent
//! before returning; no partially-applied transition is ever visible to a
//! render pass.

use wayfind_types::NavItem;

/// The navigation component's mutable state.
///
/// The keyboard focus cursor is deliberately absent: it is derived live
/// from host focus at each key event rather than persisted across renders.
#[derive(Debug, Clone, Default)]
pub struct NavState {
    /// Ordered item sequence; source of truth for rendering and traversal
    /// bounds. Replaced wholesale when configuration changes.
    pub items: Vec<NavItem>,
    /// Normalized logical path, always starting with `/`. Recomputed on
    /// mount, navigation, and popstate; never assigned by other events.
    pub current_path: String,
    /// Whether the collapsible menu is open. False at mount.
    pub is_menu_open: bool,
    /// Transient live-region text for assistive technology. Cleared and
    /// re-set (after a delay) on every transition that announces.
    pub announcement: String,
}

impl NavState {
    /// Creates state for the given item sequence, rooted at `/`.
    pub fn new(items: Vec<NavItem>) -> Self {
        Self {
            items,
            current_path: "/".to_string(),
            is_menu_open: false,
            announcement: String::new(),
        }
    }
}
