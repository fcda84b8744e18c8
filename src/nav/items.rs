//! Navigation item registry.

use super::permissions::*;

/// Icon shown next to a navigation entry.
///
/// Variants follow the Lucide icon names; `app::components::icons` owns the
/// SVG geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavIcon {
    LayoutDashboard,
    Users,
    ShieldCheck,
    Grid3x3,
    Package,
    ShoppingCart,
    Image,
    Wrench,
    MapPin,
    Warehouse,
    ClipboardList,
    Truck,
    Store,
    Star,
    BarChart3,
    SlidersHorizontal,
    Wallet,
    Handshake,
    // Shell chrome (not used by registry entries)
    Settings,
    ChevronLeft,
    LogOut,
    Menu,
    X,
}

/// One entry of the admin navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: NavIcon,
    /// Route path; unique across the registry
    pub path: &'static str,
    pub required_permission: Option<&'static str>,
    /// Only super-admins see this entry, whatever `required_permission` says
    pub super_admin_only: bool,
}

impl NavItem {
    const fn new(
        label: &'static str,
        icon: NavIcon,
        path: &'static str,
        required_permission: Option<&'static str>,
    ) -> Self {
        Self {
            label,
            icon,
            path,
            required_permission,
            super_admin_only: false,
        }
    }

    const fn super_admin(label: &'static str, icon: NavIcon, path: &'static str) -> Self {
        Self {
            label,
            icon,
            path,
            required_permission: None,
            super_admin_only: true,
        }
    }
}

/// The admin navigation, in display order.
pub static NAV_ITEMS: &[NavItem] = &[
    NavItem::new("Dashboard", NavIcon::LayoutDashboard, "/admin", None),
    NavItem::new("Users", NavIcon::Users, "/admin/users", Some(READ_USERS)),
    NavItem::super_admin("Roles & Permissions", NavIcon::ShieldCheck, "/admin/roles"),
    NavItem::new("Categories", NavIcon::Grid3x3, "/admin/categories", Some(READ_CATEGORIES)),
    NavItem::new("Products", NavIcon::Package, "/admin/products", Some(READ_PRODUCTS)),
    NavItem::new("Orders", NavIcon::ShoppingCart, "/admin/orders", Some(READ_ORDERS)),
    NavItem::new("Banners", NavIcon::Image, "/admin/banners", Some(READ_BANNERS)),
    NavItem::new("Services", NavIcon::Wrench, "/admin/services", Some(READ_SERVICES)),
    NavItem::new("Locations", NavIcon::MapPin, "/admin/locations", Some(READ_LOCATIONS)),
    NavItem::new("Godowns", NavIcon::Warehouse, "/admin/godowns", Some(READ_GODOWNS)),
    NavItem::new("Purchase", NavIcon::ClipboardList, "/admin/purchase", Some(CREATE_STOCK)),
    NavItem::new("Delivery Staff", NavIcon::Truck, "/admin/delivery", Some(READ_USERS)),
    NavItem::new("Selling Partners", NavIcon::Store, "/admin/sellers", Some(READ_USERS)),
    NavItem::new("Offers & Features", NavIcon::Star, "/admin/offers", Some(READ_PRODUCTS)),
    NavItem::new("Stock Control", NavIcon::BarChart3, "/admin/stock-control", Some(READ_STOCK)),
    NavItem::new("App Settings", NavIcon::SlidersHorizontal, "/admin/settings", Some(READ_PRODUCTS)),
    NavItem::new("Wallets", NavIcon::Wallet, "/admin/wallets", Some(READ_USERS)),
    NavItem::new("Penny Prime", NavIcon::Handshake, "/admin/penny-prime", Some(READ_ORDERS)),
    NavItem::new("Reports", NavIcon::BarChart3, "/admin/reports", Some(READ_ORDERS)),
];

/// Look up a registry entry by exact path, ignoring visibility.
pub fn find_by_path(path: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.path == path)
}
