//! Permission-based filtering of the navigation registry.

use super::items::NavItem;

/// Read-only view of what the signed-in user may do.
///
/// Implemented by the permission context in the UI and by
/// [`crate::session::PermissionSet`] for plain data.
pub trait PermissionCheck {
    fn has_permission(&self, name: &str) -> bool;
    fn is_super_admin(&self) -> bool;
}

impl<T: PermissionCheck + ?Sized> PermissionCheck for &T {
    fn has_permission(&self, name: &str) -> bool {
        (**self).has_permission(name)
    }

    fn is_super_admin(&self) -> bool {
        (**self).is_super_admin()
    }
}

impl NavItem {
    /// Whether this entry should be shown. Super-admin-only wins over the
    /// permission requirement.
    pub fn is_visible(&self, perms: &impl PermissionCheck) -> bool {
        if self.super_admin_only {
            return perms.is_super_admin();
        }
        match self.required_permission {
            Some(name) => perms.has_permission(name),
            None => true,
        }
    }
}

/// Entries of `items` visible under `perms`, in their original order.
pub fn visible_items<'a>(items: &'a [NavItem], perms: &impl PermissionCheck) -> Vec<&'a NavItem> {
    items.iter().filter(|item| item.is_visible(perms)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::items::{NavIcon, NAV_ITEMS};
    use crate::nav::permissions::READ_USERS;
    use crate::session::PermissionSet;

    fn labels(items: &[&NavItem]) -> Vec<&'static str> {
        items.iter().map(|i| i.label).collect()
    }

    #[test]
    fn test_super_admin_only_ignores_permissions() {
        let roles = NAV_ITEMS.iter().find(|i| i.super_admin_only).unwrap();

        let everything = PermissionSet::new(NAV_ITEMS.iter().filter_map(|i| i.required_permission), false);
        assert!(!roles.is_visible(&everything));

        let bare_super = PermissionSet::new(std::iter::empty::<&str>(), true);
        assert!(roles.is_visible(&bare_super));
    }

    #[test]
    fn test_super_admin_only_overrides_required_permission() {
        let item = NavItem {
            label: "Audit",
            icon: NavIcon::ShieldCheck,
            path: "/admin/audit",
            required_permission: Some("read_audit"),
            super_admin_only: true,
        };
        let granted = PermissionSet::new(["read_audit"], false);
        assert!(!item.is_visible(&granted));
        let super_no_perm = PermissionSet::new(std::iter::empty::<&str>(), true);
        assert!(item.is_visible(&super_no_perm));
    }

    #[test]
    fn test_required_permission_follows_predicate() {
        let granted = PermissionSet::new([READ_USERS], false);
        let denied = PermissionSet::default();
        for item in NAV_ITEMS.iter().filter(|i| !i.super_admin_only) {
            if let Some(perm) = item.required_permission {
                assert_eq!(item.is_visible(&granted), perm == READ_USERS, "{}", item.label);
                assert!(!item.is_visible(&denied), "{}", item.label);
            }
        }
    }

    #[test]
    fn test_unrestricted_items_always_visible() {
        let nobody = PermissionSet::default();
        let dashboard = &NAV_ITEMS[0];
        assert!(dashboard.required_permission.is_none());
        assert!(dashboard.is_visible(&nobody));
        assert!(dashboard.is_visible(&PermissionSet::new(std::iter::empty::<&str>(), true)));
    }

    #[test]
    fn test_read_users_scenario() {
        let perms = PermissionSet::new([READ_USERS], false);
        let visible = visible_items(NAV_ITEMS, &perms);
        assert_eq!(
            labels(&visible),
            vec!["Dashboard", "Users", "Delivery Staff", "Selling Partners", "Wallets"]
        );
    }

    #[test]
    fn test_super_admin_without_permissions() {
        let perms = PermissionSet::new(std::iter::empty::<&str>(), true);
        let visible = visible_items(NAV_ITEMS, &perms);
        assert_eq!(labels(&visible), vec!["Dashboard", "Roles & Permissions"]);
    }

    #[test]
    fn test_filter_preserves_order_and_is_idempotent() {
        let perms = PermissionSet::new(["read_orders", "read_products", "read_stock"], false);
        let once = visible_items(NAV_ITEMS, &perms);

        let positions: Vec<_> = once
            .iter()
            .map(|v| NAV_ITEMS.iter().position(|i| i.path == v.path).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let owned: Vec<NavItem> = once.iter().map(|i| **i).collect();
        let twice = visible_items(&owned, &perms);
        assert_eq!(labels(&once), labels(&twice));
    }
}
