//! Sidebar navigation table.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { path: "/", label: "Dashboard" },
    NavItem { path: "/meals", label: "Meals" },
    NavItem { path: "/recipes", label: "Recipes" },
    NavItem { path: "/foods", label: "Foods" },
    NavItem { path: "/glucose", label: "Glucose Monitoring" },
    NavItem { path: "/profile", label: "Profile" },
];

/// Exact-match highlighting; a trailing slash on the current path is ignored.
pub fn is_active(current_path: &str, item_path: &str) -> bool {
    let current = match current_path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    current == item_path
}

/// CSS class for a sidebar link.
pub fn link_class(current_path: &str, item_path: &str) -> &'static str {
    if is_active(current_path, item_path) {
        "sidebar__link sidebar__link--active"
    } else {
        "sidebar__link"
    }
}
