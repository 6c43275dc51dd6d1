//! Environment provider capability.
//!
//! The component never reads ambient browser state (window size, location,
//! history) directly; it depends on this injected capability instead,
//! which keeps the engine deterministic under test. Resize and popstate
//! subscriptions are the host's job: the host adapter registers with its
//! platform and delivers events by calling `NavComponent::on_resize` /
//! `NavComponent::on_pop_state`.

/// Read-only view of the hosting environment.
pub trait HostEnv {
    /// Full pathname of the current location, including any base-path
    /// prefix applied by the hosting platform.
    fn location_path(&self) -> String;

    /// Base-path prefix the platform serves the site under. Empty when the
    /// site is served from the origin root.
    fn base_path(&self) -> String;

    /// Whether the viewport is at or above the "wide" breakpoint (the
    /// host's analog of a `min-width: 48em` media query).
    fn is_wide_viewport(&self) -> bool;
}

/// Fixed environment values, useful for hosts with a static base path and
/// as a deterministic stand-in under test.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    pub location_path: String,
    pub base_path: String,
    pub wide_viewport: bool,
}

impl HostEnv for StaticEnv {
    fn location_path(&self) -> String {
        self.location_path.clone()
    }

    fn base_path(&self) -> String {
        self.base_path.clone()
    }

    fn is_wide_viewport(&self) -> bool {
        self.wide_viewport
    }
}
