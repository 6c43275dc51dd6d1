//! Navigation configuration: item sequences and brand metadata.
//!
//! The hosting CMS supplies `navigationItems` either as a pre-parsed
//! sequence or as a JSON-encoded string. Malformed JSON is recovered
//! locally: the error is logged and the previous (default) sequence is
//! retained, so the component is never left without items.

use once_cell::sync::Lazy;
use thiserror::Error;
use wayfind_types::NavItem;

/// Error surfaced when a navigation items payload cannot be parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The payload was not a valid JSON array of items.
    #[error("invalid navigation items JSON: {0}")]
    Json(#[from] serde_json::Error),
}

static DEFAULT_ITEMS: Lazy<Vec<NavItem>> = Lazy::new(|| {
    vec![
        NavItem::new("home", "Home", "/"),
        NavItem::new("experience", "Experience", "/experience"),
        NavItem::new("projects", "Projects", "/projects"),
        NavItem::new("education", "Education", "/education"),
        NavItem::new("contact", "Contact", "/contact"),
    ]
});

/// The default five-item portfolio navigation sequence.
pub fn default_nav_items() -> Vec<NavItem> {
    DEFAULT_ITEMS.clone()
}

/// Parses a JSON-encoded navigation item sequence.
pub fn parse_nav_items(raw: &str) -> Result<Vec<NavItem>, ConfigError> {
    Ok(serde_json::from_str(raw)?)
}

/// Brand metadata displayed alongside the navigation.
#[derive(Debug, Clone)]
pub struct BrandConfig {
    /// Site/brand name shown next to the logo.
    pub brand_name: String,
    /// Logo image URL, when one is configured.
    pub logo_url: Option<String>,
    /// Alt text for the logo image.
    pub logo_alt_text: String,
}

impl BrandConfig {
    /// Whether a logo is configured.
    pub fn has_logo(&self) -> bool {
        self.logo_url.is_some()
    }
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            brand_name: "Wayfind".to_string(),
            logo_url: None,
            logo_alt_text: "Home".to_string(),
        }
    }
}
