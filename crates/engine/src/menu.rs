//! Menu open/close state machine and its side effects.
//!
//! The controller owns every transition of the `is_menu_open` flag. Each
//! operation mutates the shared [`NavState`], routes announcements through
//! the [`Announcer`], and returns the focus/navigation effects the host
//! must apply. The post-open focus move is deferred one rendering frame so
//! the just-opened menu region is guaranteed to be laid out before focus
//! lands in it.

use tracing::{debug, warn};
use wayfind_types::Effect;

use crate::announce::Announcer;
use crate::schedule::{Delay, Scheduler, Task, TaskHandle};
use crate::state::NavState;

/// Live-region message emitted when the menu opens.
pub const MENU_OPENED_MSG: &str = "Navigation menu opened";
/// Live-region message emitted when the menu closes.
pub const MENU_CLOSED_MSG: &str = "Navigation menu closed";

/// Controller for the collapsible menu's state machine.
#[derive(Debug, Default)]
pub struct MenuController {
    pending_focus: Option<TaskHandle>,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the menu open/closed.
    ///
    /// Opening announces and schedules the first-item focus move for the
    /// next frame; closing announces and returns focus to the toggle. An
    /// empty item sequence refuses to open: an open menu must always have
    /// well-defined first and last focusable items.
    pub fn toggle(&mut self, state: &mut NavState, announcer: &mut Announcer, sched: &mut dyn Scheduler) -> Vec<Effect> {
        if state.is_menu_open {
            return self.close(state, announcer, sched);
        }
        if state.items.is_empty() {
            warn!("refusing to open navigation menu with no items");
            return vec![];
        }

        state.is_menu_open = true;
        debug!("navigation menu opened");
        announcer.announce(state, sched, MENU_OPENED_MSG);
        if let Some(handle) = self.pending_focus.take() {
            sched.cancel(handle);
        }
        self.pending_focus = Some(sched.schedule(Delay::NextFrame, Task::FocusFirstItem));
        vec![]
    }

    /// Closes the menu if open; a closed menu is left untouched with no
    /// announcement, so repeated calls never double-announce.
    pub fn close(&mut self, state: &mut NavState, announcer: &mut Announcer, sched: &mut dyn Scheduler) -> Vec<Effect> {
        if !state.is_menu_open {
            return vec![];
        }
        state.is_menu_open = false;
        debug!("navigation menu closed");
        announcer.announce(state, sched, MENU_CLOSED_MSG);
        vec![Effect::FocusToggle]
    }

    /// Auto-closes the menu when the viewport crosses into the wide
    /// breakpoint. Narrowing never changes menu state: resize only ever
    /// closes, it never opens.
    pub fn on_viewport_change(
        &mut self,
        is_wide: bool,
        state: &mut NavState,
        announcer: &mut Announcer,
        sched: &mut dyn Scheduler,
    ) -> Vec<Effect> {
        if is_wide && state.is_menu_open {
            self.close(state, announcer, sched)
        } else {
            vec![]
        }
    }

    /// Handles activation of a navigation link: closes the menu, requests
    /// navigation to the absolute target, and optimistically records the
    /// new logical path without waiting for the host round trip.
    pub fn on_navigate(
        &mut self,
        url: &str,
        base_path: &str,
        state: &mut NavState,
        announcer: &mut Announcer,
        sched: &mut dyn Scheduler,
    ) -> Vec<Effect> {
        let mut effects = self.close(state, announcer, sched);
        effects.push(Effect::Navigate(format!("{base_path}{url}")));
        state.current_path = url.to_string();
        effects
    }

    /// Cancels the pending first-item focus move; called at teardown.
    pub fn cancel_pending(&mut self, sched: &mut dyn Scheduler) {
        if let Some(handle) = self.pending_focus.take() {
            sched.cancel(handle);
        }
    }
}
