//! View model handed to the rendering layer.
//!
//! Attribute values here are a bit-exact contract: `aria-expanded` and
//! `aria-hidden` are the strings `"true"`/`"false"` (not booleans),
//! `aria-current="page"` appears only on the single active item, and the
//! roving tabindex puts `"0"` on the first item and `"-1"` on the rest so
//! exactly one item sits in the natural Tab order.

use wayfind_types::NavItem;

use crate::config::BrandConfig;
use crate::route;
use crate::state::NavState;

/// Render-ready projection of one navigation item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItemView {
    pub id: String,
    pub label: String,
    pub url: String,
    /// Position within the item sequence.
    pub index: usize,
    /// Whether this item matches the current route.
    pub is_active: bool,
    /// `Some("page")` on the active item, `None` elsewhere.
    pub aria_current: Option<&'static str>,
    /// `"0"` for the first item, `"-1"` for all others.
    pub tab_index: &'static str,
    /// CSS class list for the item.
    pub item_class: String,
}

/// Render-ready projection of the whole navigation component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavView {
    pub items: Vec<NavItemView>,
    /// `aria-expanded` value for the menu toggle.
    pub menu_expanded: &'static str,
    /// `aria-hidden` value for the collapsible region.
    pub menu_hidden: &'static str,
    /// CSS class list for the nav container.
    pub container_class: String,
    /// CSS class list for the hamburger toggle.
    pub hamburger_class: String,
    /// Current live-region text.
    pub announcement: String,
    pub brand_name: String,
    pub logo_url: Option<String>,
    pub logo_alt_text: String,
    pub has_logo: bool,
}

/// Builds the view model for the current state.
pub fn build(state: &NavState, brand: &BrandConfig) -> NavView {
    let items = state
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| item_view(item, index, &state.current_path))
        .collect();

    NavView {
        items,
        menu_expanded: bool_attr(state.is_menu_open),
        menu_hidden: bool_attr(!state.is_menu_open),
        container_class: toggled_class("nav-container", "nav-container--open", state.is_menu_open),
        hamburger_class: toggled_class("hamburger", "hamburger--active", state.is_menu_open),
        announcement: state.announcement.clone(),
        brand_name: brand.brand_name.clone(),
        logo_url: brand.logo_url.clone(),
        logo_alt_text: brand.logo_alt_text.clone(),
        has_logo: brand.has_logo(),
    }
}

fn item_view(item: &NavItem, index: usize, current_path: &str) -> NavItemView {
    let is_active = route::is_active(&item.url, current_path);
    NavItemView {
        id: item.id.clone(),
        label: item.label.clone(),
        url: item.url.clone(),
        index,
        is_active,
        aria_current: if is_active { Some("page") } else { None },
        tab_index: if index == 0 { "0" } else { "-1" },
        item_class: toggled_class("nav-item", "nav-item--active", is_active),
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn toggled_class(base: &str, modifier: &str, on: bool) -> String {
    if on {
        format!("{base} {modifier}")
    } else {
        base.to_string()
    }
}
