//! Permission names referenced by the navigation registry.
//!
//! The names are opaque to the shell; their meaning lives with whoever
//! grants them. Keeping them here avoids typos across the registry and tests.

/// Permission to list users, delivery staff, sellers and wallets
pub const READ_USERS: &str = "read_users";
/// Permission to list categories
pub const READ_CATEGORIES: &str = "read_categories";
/// Permission to list products, offers and app settings
pub const READ_PRODUCTS: &str = "read_products";
/// Permission to list orders and reports
pub const READ_ORDERS: &str = "read_orders";
/// Permission to list banners
pub const READ_BANNERS: &str = "read_banners";
/// Permission to list services
pub const READ_SERVICES: &str = "read_services";
/// Permission to list locations
pub const READ_LOCATIONS: &str = "read_locations";
/// Permission to list godowns (warehouses)
pub const READ_GODOWNS: &str = "read_godowns";
/// Permission to record purchases
pub const CREATE_STOCK: &str = "create_stock";
/// Permission to view stock levels
pub const READ_STOCK: &str = "read_stock";
