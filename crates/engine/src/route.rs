//! Logical-route computation and active-route matching.
//!
//! The hosting platform serves the site under an opaque base-path prefix;
//! these helpers strip that prefix to obtain the logical path and decide
//! which navigation item is "current". Both functions are pure and
//! idempotent so callers may invoke them on mount, after navigation, and
//! on every popstate without observable side effects.

/// Computes the logical path by stripping `base_path` from the front of
/// `location_path`. An empty remainder (or an empty input) maps to `/`.
pub fn compute_current_path(location_path: &str, base_path: &str) -> String {
    let stripped = location_path.strip_prefix(base_path).unwrap_or(location_path);
    if stripped.is_empty() {
        "/".to_string()
    } else {
        stripped.to_string()
    }
}

/// Returns whether `item_url` should be marked as the active route for
/// `current_path`.
///
/// The root item matches only `/` (or an empty path). Every other item
/// matches on a literal string prefix, with no path-segment boundary:
/// `/experience` is active for `/experience-detail` too. That coarseness
/// is intentional and relied upon by the view contract.
pub fn is_active(item_url: &str, current_path: &str) -> bool {
    if item_url == "/" {
        return current_path == "/" || current_path.is_empty();
    }
    current_path.starts_with(item_url)
}
