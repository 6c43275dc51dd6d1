//! # Wayfind Engine
//!
//! Wayfind is a headless, accessibility-first navigation interaction engine
//! for a portfolio site. It owns the open/closed state of a collapsible
//! (mobile) menu, implements full keyboard traversal with a roving
//! tabindex and a Tab focus trap, tracks the current logical route against
//! a host-supplied base path, and announces state changes to assistive
//! technology through a debounced live region.
//!
//! The engine is deliberately host-agnostic: it never reads ambient
//! browser state and never touches a DOM. Hosts inject an environment
//! capability ([`HostEnv`]), deliver discrete events (clicks, key presses,
//! resize, popstate) as method calls on [`NavComponent`], and apply the
//! [`Effect`](wayfind_types::Effect)s each handler returns. Deferred work
//! (the post-open focus move and the announcer's delayed set) goes through
//! the [`Scheduler`] abstraction so it can be cancelled at teardown and
//! driven deterministically in tests.
//!
//! ## Architecture
//!
//! - **`route`**: logical-path computation and active-route matching
//! - **`menu`**: the open/close state machine and its side effects
//! - **`traversal`**: wraparound focus arithmetic and the Tab trap
//! - **`announce`**: the clear/delay/set live-region announcer
//! - **`schedule`**: deferred-task abstraction with cancel handles
//! - **`config`**: navigation item configuration with JSON fallback
//! - **`view`**: the attribute/class view model a rendering layer consumes
//! - **`component`**: [`NavComponent`], the composition of the above

pub mod announce;
pub mod component;
pub mod config;
pub mod env;
pub mod menu;
pub mod route;
pub mod schedule;
pub mod state;
pub mod traversal;
pub mod view;

pub use announce::{ANNOUNCE_DELAY_MS, Announcer};
pub use component::NavComponent;
pub use config::{BrandConfig, ConfigError, default_nav_items, parse_nav_items};
pub use env::HostEnv;
pub use menu::{MENU_CLOSED_MSG, MENU_OPENED_MSG, MenuController};
pub use schedule::{Delay, QueueScheduler, Scheduler, Task, TaskHandle};
pub use state::NavState;
pub use view::{NavItemView, NavView};
