//! Dioxus fullstack page components.
//!
//! Every admin page renders inside `AdminLayout`; the storefront sits
//! outside it.

mod not_found;
mod sections;
mod storefront;

pub use not_found::NotFound;
pub use sections::*;
pub use storefront::Storefront;
