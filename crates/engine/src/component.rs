//! The composed navigation component.
//!
//! [`NavComponent`] holds the shared state record and delegates to the
//! menu controller, traversal arithmetic, route tracker, and announcer; it
//! is a composition, not an inheritance hierarchy. A host adapter wires
//! its platform events to the handler methods below, applies the returned
//! effects, drives the scheduler, and renders from [`NavComponent::view`].

use tracing::warn;
use wayfind_types::{Effect, KeyInput, NavItem, NavKey};

use crate::announce::Announcer;
use crate::config::{self, BrandConfig};
use crate::env::HostEnv;
use crate::menu::MenuController;
use crate::route;
use crate::schedule::{Scheduler, Task};
use crate::state::NavState;
use crate::traversal;
use crate::view::{self, NavView};

/// Accessible site-navigation component: collapsible menu, roving-tabindex
/// keyboard traversal, route tracking, and live-region announcements.
#[derive(Debug)]
pub struct NavComponent {
    state: NavState,
    brand: BrandConfig,
    menu: MenuController,
    announcer: Announcer,
    connected: bool,
}

impl Default for NavComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl NavComponent {
    /// Creates a component with the default item sequence and brand.
    pub fn new() -> Self {
        Self::with_items(config::default_nav_items())
    }

    /// Creates a component with a custom item sequence.
    pub fn with_items(items: Vec<NavItem>) -> Self {
        Self {
            state: NavState::new(items),
            brand: BrandConfig::default(),
            menu: MenuController::new(),
            announcer: Announcer::new(),
            connected: false,
        }
    }

    /// Read access to the shared state record.
    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Brand metadata shown alongside the items.
    pub fn brand(&self) -> &BrandConfig {
        &self.brand
    }

    pub fn set_brand(&mut self, brand: BrandConfig) {
        self.brand = brand;
    }

    /// Replaces the item sequence wholesale.
    pub fn set_navigation_items(&mut self, items: Vec<NavItem>) {
        self.state.items = items;
    }

    /// Replaces the item sequence from a JSON-encoded payload. Malformed
    /// JSON is logged and the previous sequence is retained; the items are
    /// never left undefined.
    pub fn set_navigation_items_json(&mut self, raw: &str) {
        match config::parse_nav_items(raw) {
            Ok(items) => self.state.items = items,
            Err(err) => warn!(%err, "invalid navigationItems payload, keeping previous items"),
        }
    }

    /// Mount hook: computes the initial logical path from the environment.
    pub fn connected(&mut self, env: &dyn HostEnv) {
        self.connected = true;
        self.recompute_path(env);
    }

    /// Unmount hook: cancels pending deferred tasks so nothing acts on a
    /// destroyed component, and marks later stale callbacks as no-ops.
    pub fn disconnected(&mut self, sched: &mut dyn Scheduler) {
        self.connected = false;
        self.menu.cancel_pending(sched);
        self.announcer.cancel_pending(sched);
    }

    /// Browser back/forward: the location changed under us.
    pub fn on_pop_state(&mut self, env: &dyn HostEnv) {
        self.recompute_path(env);
    }

    /// Host router reported a page change (the platform's current-page
    /// reference wire).
    pub fn on_page_reference_change(&mut self, env: &dyn HostEnv) {
        self.recompute_path(env);
    }

    /// Window resize: auto-closes the menu when the viewport crosses into
    /// the wide breakpoint.
    pub fn on_resize(&mut self, env: &dyn HostEnv, sched: &mut dyn Scheduler) -> Vec<Effect> {
        self.menu
            .on_viewport_change(env.is_wide_viewport(), &mut self.state, &mut self.announcer, sched)
    }

    /// Click on the menu toggle (hamburger).
    pub fn handle_toggle_click(&mut self, sched: &mut dyn Scheduler) -> Vec<Effect> {
        self.menu.toggle(&mut self.state, &mut self.announcer, sched)
    }

    /// Click on a navigation link.
    pub fn handle_nav_click(&mut self, env: &dyn HostEnv, sched: &mut dyn Scheduler, url: &str) -> Vec<Effect> {
        self.menu
            .on_navigate(url, &env.base_path(), &mut self.state, &mut self.announcer, sched)
    }

    /// Click on the brand/logo: navigate home.
    pub fn handle_brand_click(&mut self, env: &dyn HostEnv, sched: &mut dyn Scheduler) -> Vec<Effect> {
        self.handle_nav_click(env, sched, "/")
    }

    /// Click on the skip link: move focus to the main content region.
    pub fn handle_skip_to_main(&self) -> Vec<Effect> {
        vec![Effect::FocusMain]
    }

    /// Keyboard input scoped to the navigation links.
    ///
    /// `current_index` is the position of the focused element within the
    /// item sequence, or `None` when focus sits outside it. A non-empty
    /// return means the input was consumed and the host must suppress its
    /// default behavior.
    pub fn handle_key(&mut self, sched: &mut dyn Scheduler, input: KeyInput, current_index: Option<usize>) -> Vec<Effect> {
        let n = self.state.items.len();
        let cursor = current_index.map_or(-1, |i| i as isize);

        match input.key {
            NavKey::ArrowRight | NavKey::ArrowDown => {
                if n == 0 {
                    return vec![];
                }
                vec![Effect::FocusItem(traversal::next_index(cursor, n))]
            }
            NavKey::ArrowLeft | NavKey::ArrowUp => {
                if n == 0 {
                    return vec![];
                }
                vec![Effect::FocusItem(traversal::prev_index(cursor, n))]
            }
            NavKey::Home => {
                if n == 0 {
                    return vec![];
                }
                vec![Effect::FocusItem(0)]
            }
            NavKey::End => {
                if n == 0 {
                    return vec![];
                }
                vec![Effect::FocusItem(n - 1)]
            }
            NavKey::Escape => {
                if self.state.is_menu_open {
                    self.menu.close(&mut self.state, &mut self.announcer, sched)
                } else {
                    vec![]
                }
            }
            NavKey::Tab => {
                if self.state.is_menu_open && traversal::tab_trap_redirects(input.shift, current_index, n) {
                    vec![Effect::FocusToggle]
                } else {
                    vec![]
                }
            }
        }
    }

    /// Applies a fired scheduled task. Stale callbacks after
    /// [`disconnected`](Self::disconnected) are no-ops.
    pub fn run_task(&mut self, task: Task) -> Vec<Effect> {
        if !self.connected {
            return vec![];
        }
        match task {
            Task::FocusFirstItem => {
                // Focus management is best-effort: nothing to focus is a
                // silent no-op, not an error.
                if self.state.items.is_empty() {
                    vec![]
                } else {
                    vec![Effect::FocusItem(0)]
                }
            }
            Task::SetAnnouncement(message) => {
                self.state.announcement = message;
                vec![]
            }
        }
    }

    /// Builds the render-ready view model.
    pub fn view(&self) -> NavView {
        view::build(&self.state, &self.brand)
    }

    fn recompute_path(&mut self, env: &dyn HostEnv) {
        self.state.current_path = route::compute_current_path(&env.location_path(), &env.base_path());
    }
}
