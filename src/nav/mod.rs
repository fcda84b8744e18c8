//! Admin navigation model.
//!
//! Everything here is plain data and pure functions, shared by the server
//! (SSR) and the WASM client. The Dioxus components in `app::components`
//! only render what this module decides.

pub mod active;
pub mod drawer;
pub mod items;
pub mod permissions;
pub mod visibility;

pub use active::{current_page_label, is_active, link_class, FALLBACK_LABEL};
pub use drawer::{DrawerEvent, DrawerState};
pub use items::{find_by_path, NavIcon, NavItem, NAV_ITEMS};
pub use visibility::{visible_items, PermissionCheck};
