//! Debounced live-region announcer for assistive technology.
//!
//! Assistive technology only reads a live region when its value *changes*,
//! so re-announcing the same message back-to-back requires forcing it
//! through an empty intermediate value. [`Announcer::announce`] clears the
//! region synchronously and schedules the set for 100 ms later; setting
//! the text directly would silently drop repeated identical messages.

use crate::schedule::{Delay, Scheduler, Task, TaskHandle};
use crate::state::NavState;

/// Delay between the synchronous clear and the deferred set.
pub const ANNOUNCE_DELAY_MS: u64 = 100;

/// Owns the single pending live-region update.
///
/// A second `announce` within the delay window cancels the pending set and
/// replaces it: last call wins, since the most recent state is the most
/// relevant one to read out.
#[derive(Debug, Default)]
pub struct Announcer {
    pending: Option<TaskHandle>,
}

impl Announcer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the live region now and schedules `message` to be set after
    /// [`ANNOUNCE_DELAY_MS`].
    pub fn announce(&mut self, state: &mut NavState, sched: &mut dyn Scheduler, message: &str) {
        state.announcement.clear();
        if let Some(handle) = self.pending.take() {
            sched.cancel(handle);
        }
        self.pending = Some(sched.schedule(
            Delay::Millis(ANNOUNCE_DELAY_MS),
            Task::SetAnnouncement(message.to_string()),
        ));
    }

    /// Cancels any pending set; called at component teardown.
    pub fn cancel_pending(&mut self, sched: &mut dyn Scheduler) {
        if let Some(handle) = self.pending.take() {
            sched.cancel(handle);
        }
    }
}
