//! Deferred-task abstraction for the engine's two asynchronous effects.
//!
//! The engine is synchronous except for (a) the post-menu-open focus move,
//! deferred one rendering frame so the menu region has been laid out, and
//! (b) the announcer's delayed live-region set. Both are modeled as data
//! handed to a [`Scheduler`] rather than ambient timers, so the component
//! can cancel them at teardown and tests can drive them deterministically.
//!
//! A host adapter maps [`Delay::NextFrame`] onto its frame callback and
//! [`Delay::Millis`] onto a one-shot timer, then feeds fired tasks back
//! into `NavComponent::run_task`.

/// When a scheduled task should fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delay {
    /// On the host's next rendering frame.
    NextFrame,
    /// After a fixed number of milliseconds.
    Millis(u64),
}

/// A deferred unit of work. Tasks are data, not closures, so schedulers
/// stay inspectable and the component can apply them itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Move focus to the first navigable item (post-open).
    FocusFirstItem,
    /// Set the live-region announcement text (post-clear).
    SetAnnouncement(String),
}

/// Opaque handle for cancelling a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

/// Capability for scheduling and cancelling deferred tasks.
pub trait Scheduler {
    /// Schedules `task` to fire after `delay`, returning a cancel handle.
    fn schedule(&mut self, delay: Delay, task: Task) -> TaskHandle;
    /// Cancels a pending task. Unknown or already-fired handles are a
    /// silent no-op.
    fn cancel(&mut self, handle: TaskHandle);
}

/// Host-driven queue scheduler.
///
/// Pending tasks accumulate until the host drains them: frame tasks when
/// it next paints, timer tasks when the corresponding delay elapses. Tests
/// use the same drain methods to step deferred effects explicitly.
#[derive(Debug, Default)]
pub struct QueueScheduler {
    next_id: u64,
    pending: Vec<(TaskHandle, Delay, Task)>,
}

impl QueueScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks still pending.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Drains tasks scheduled for the next frame, in schedule order.
    pub fn take_frame_tasks(&mut self) -> Vec<Task> {
        self.take_matching(|delay| delay == Delay::NextFrame)
    }

    /// Drains timer tasks, in schedule order. The caller decides that the
    /// delays have elapsed; the queue does not track wall-clock time.
    pub fn take_timer_tasks(&mut self) -> Vec<Task> {
        self.take_matching(|delay| matches!(delay, Delay::Millis(_)))
    }

    fn take_matching(&mut self, pred: impl Fn(Delay) -> bool) -> Vec<Task> {
        let mut due = Vec::new();
        self.pending.retain(|(_, delay, task)| {
            if pred(*delay) {
                due.push(task.clone());
                false
            } else {
                true
            }
        });
        due
    }
}

impl Scheduler for QueueScheduler {
    fn schedule(&mut self, delay: Delay, task: Task) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.pending.push((handle, delay, task));
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) {
        self.pending.retain(|(h, _, _)| *h != handle);
    }
}
