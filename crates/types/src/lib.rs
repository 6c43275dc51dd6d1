//! Shared type definitions for the Wayfind navigation engine.
//!
//! This crate holds the plain data types exchanged between the interaction
//! engine and a host/rendering layer: navigation items, key-input symbols,
//! and the `Effect` enum handlers report instead of touching the host
//! directly.

use std::{error::Error, str::FromStr};

use serde::{Deserialize, Serialize};

/// A single entry in the navigation menu.
///
/// Identity is the `id`; items are unique within the ordered sequence
/// supplied to the component and immutable for a given interaction cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Stable identifier (e.g., "home", "contact").
    pub id: String,
    /// Human-friendly label rendered as the link text.
    pub label: String,
    /// Site-relative URL, always starting with `/`.
    pub url: String,
}

impl NavItem {
    /// Creates a new navigation item.
    pub fn new(id: impl Into<String>, label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Keyboard symbols the traversal engine understands.
///
/// These mirror the DOM `KeyboardEvent.key` names at the host boundary;
/// everything else is ignored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    ArrowRight,
    ArrowDown,
    ArrowLeft,
    ArrowUp,
    Home,
    End,
    Escape,
    Tab,
}

impl FromStr for NavKey {
    type Err = ParseNavKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowRight" => Ok(Self::ArrowRight),
            "ArrowDown" => Ok(Self::ArrowDown),
            "ArrowLeft" => Ok(Self::ArrowLeft),
            "ArrowUp" => Ok(Self::ArrowUp),
            "Home" => Ok(Self::Home),
            "End" => Ok(Self::End),
            "Escape" => Ok(Self::Escape),
            "Tab" => Ok(Self::Tab),
            _ => Err(ParseNavKeyError),
        }
    }
}

/// Error returned when a key name is not one the engine handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseNavKeyError;

impl std::fmt::Display for ParseNavKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("key is not handled by the navigation engine")
    }
}

impl Error for ParseNavKeyError {}

/// A key press delivered to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    /// The logical key.
    pub key: NavKey,
    /// Whether Shift was held (relevant for Tab trapping only).
    pub shift: bool,
}

impl KeyInput {
    /// A plain key press without modifiers.
    pub fn plain(key: NavKey) -> Self {
        Self { key, shift: false }
    }

    /// A key press with Shift held.
    pub fn shifted(key: NavKey) -> Self {
        Self { key, shift: true }
    }
}

/// Side-effect requests reported by event handlers.
///
/// The engine never reaches into the host; it returns the effects a
/// transition requires and the host applies them. A handler returning a
/// non-empty effect list has consumed the input, so the host must also
/// suppress the input's default behavior in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Move focus to the navigation item at this index.
    FocusItem(usize),
    /// Move focus to the menu toggle control.
    FocusToggle,
    /// Move focus to the page's main content region (skip link).
    FocusMain,
    /// Navigate to this absolute URL via the host's navigation facility.
    Navigate(String),
}
