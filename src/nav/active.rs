//! Active-route resolution and link styling.

use super::items::NavItem;

/// Header title when the current path matches no visible entry.
pub const FALLBACK_LABEL: &str = "Admin";

const LINK_BASE: &str =
    "flex items-center gap-3 rounded-lg px-3 py-2.5 text-sm font-medium transition-colors";
const LINK_ACTIVE: &str = "bg-primary text-primary-foreground";
const LINK_INACTIVE: &str = "text-muted-foreground hover:bg-muted hover:text-foreground";

/// Exact path equality; `/admin` is not active on `/admin/users`.
pub fn is_active(item: &NavItem, current_path: &str) -> bool {
    item.path == current_path
}

/// Label of the visible entry whose path equals `current_path`.
pub fn current_page_label<'a>(current_path: &str, visible: &[&'a NavItem]) -> &'a str {
    visible
        .iter()
        .find(|item| is_active(item, current_path))
        .map(|item| item.label)
        .unwrap_or(FALLBACK_LABEL)
}

/// Full class list for a navigation link.
pub fn link_class(active: bool) -> String {
    let state = if active { LINK_ACTIVE } else { LINK_INACTIVE };
    format!("{LINK_BASE} {state}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::items::NAV_ITEMS;
    use crate::nav::visibility::visible_items;
    use crate::session::PermissionSet;

    #[test]
    fn test_label_for_exact_match() {
        let perms = PermissionSet::new(["read_products"], false);
        let visible = visible_items(NAV_ITEMS, &perms);
        assert_eq!(current_page_label("/admin/products", &visible), "Products");
        assert_eq!(current_page_label("/admin", &visible), "Dashboard");
    }

    #[test]
    fn test_label_falls_back_without_exact_match() {
        let perms = PermissionSet::new(["read_products"], false);
        let visible = visible_items(NAV_ITEMS, &perms);
        assert_eq!(current_page_label("/admin/products/42", &visible), FALLBACK_LABEL);
        assert_eq!(current_page_label("/", &visible), FALLBACK_LABEL);
    }

    #[test]
    fn test_hidden_item_does_not_name_the_page() {
        // Orders exists in the registry but is filtered out
        let perms = PermissionSet::new(["read_products"], false);
        let visible = visible_items(NAV_ITEMS, &perms);
        assert_eq!(current_page_label("/admin/orders", &visible), "Admin");
    }

    #[test]
    fn test_only_matching_link_is_active() {
        let perms = PermissionSet::new(["read_products", "read_orders"], false);
        let visible = visible_items(NAV_ITEMS, &perms);
        let current = "/admin/products";

        for item in &visible {
            let class = link_class(is_active(item, current));
            if item.label == "Products" {
                assert!(class.ends_with("bg-primary text-primary-foreground"));
            } else {
                assert!(class.contains("text-muted-foreground"), "{}", item.label);
                assert!(!class.contains("bg-primary"), "{}", item.label);
            }
        }
    }

    #[test]
    fn test_dashboard_is_not_a_prefix_match() {
        assert!(!is_active(&NAV_ITEMS[0], "/admin/users"));
        assert!(is_active(&NAV_ITEMS[0], "/admin"));
    }
}
