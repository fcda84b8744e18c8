//! Shared UI components for the Dioxus fullstack web UI.

pub mod button;
pub mod footer;
pub mod icons;
pub mod layout;
pub mod mobile;
pub mod nav;
pub mod sheet;
pub mod sidebar;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use icons::Icon;
pub use layout::AdminLayout;
pub use nav::NavLinks;
pub use sheet::Sheet;
