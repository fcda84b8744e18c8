//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod components;
pub mod pages;
pub mod server_fns;
pub mod session;

use pages::{
    AppSettings, Banners, Categories, Dashboard, DeliveryStaff, Godowns, Locations, NotFound,
    Offers, Orders, PennyPrime, Products, Purchase, Reports, Roles, SellingPartners, Services,
    StockControl, Storefront, Users, Wallets,
};
use session::SessionProvider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Session contexts live at the root so every page shares one load
    rsx! {
        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Application routes. Admin paths mirror `nav::NAV_ITEMS`.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Storefront {},
    #[route("/admin")]
    Dashboard {},
    #[route("/admin/users")]
    Users {},
    #[route("/admin/roles")]
    Roles {},
    #[route("/admin/categories")]
    Categories {},
    #[route("/admin/products")]
    Products {},
    #[route("/admin/orders")]
    Orders {},
    #[route("/admin/banners")]
    Banners {},
    #[route("/admin/services")]
    Services {},
    #[route("/admin/locations")]
    Locations {},
    #[route("/admin/godowns")]
    Godowns {},
    #[route("/admin/purchase")]
    Purchase {},
    #[route("/admin/delivery")]
    DeliveryStaff {},
    #[route("/admin/sellers")]
    SellingPartners {},
    #[route("/admin/offers")]
    Offers {},
    #[route("/admin/stock-control")]
    StockControl {},
    #[route("/admin/settings")]
    AppSettings {},
    #[route("/admin/wallets")]
    Wallets {},
    #[route("/admin/penny-prime")]
    PennyPrime {},
    #[route("/admin/reports")]
    Reports {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
