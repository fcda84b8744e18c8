//! Admin section pages, one per navigation entry.

use dioxus::prelude::*;

use crate::app::components::AdminLayout;
use crate::app::session::use_permissions;
use crate::nav::{find_by_path, FALLBACK_LABEL};

#[derive(Props, Clone, PartialEq)]
pub struct AdminSectionProps {
    /// Registry path of the section
    pub path: &'static str,
}

fn section_label(path: &str) -> &'static str {
    find_by_path(path).map_or(FALLBACK_LABEL, |item| item.label)
}

/// Section heading plus either the section body or an access notice.
#[component]
pub fn AdminSection(props: AdminSectionProps) -> Element {
    let permissions = use_permissions();
    let item = find_by_path(props.path);
    let label = section_label(props.path);
    let allowed = item.is_some_and(|i| i.is_visible(&permissions));

    rsx! {
        AdminLayout {
            div { class: "space-y-4",
                h1 { class: "text-2xl font-bold tracking-tight", "{label}" }
                if allowed {
                    div { class: "rounded-lg border bg-card p-6 text-sm text-muted-foreground",
                        "Nothing to show in {label} yet."
                    }
                } else {
                    div { class: "rounded-lg border border-destructive/50 bg-card p-6 text-sm text-destructive",
                        "You do not have access to this section."
                    }
                }
            }
        }
    }
}

macro_rules! admin_sections {
    ($($name:ident => $path:literal),* $(,)?) => {
        $(
            #[component]
            pub fn $name() -> Element {
                rsx! { AdminSection { path: $path } }
            }
        )*
    };
}

admin_sections! {
    Dashboard => "/admin",
    Users => "/admin/users",
    Roles => "/admin/roles",
    Categories => "/admin/categories",
    Products => "/admin/products",
    Orders => "/admin/orders",
    Banners => "/admin/banners",
    Services => "/admin/services",
    Locations => "/admin/locations",
    Godowns => "/admin/godowns",
    Purchase => "/admin/purchase",
    DeliveryStaff => "/admin/delivery",
    SellingPartners => "/admin/sellers",
    Offers => "/admin/offers",
    StockControl => "/admin/stock-control",
    AppSettings => "/admin/settings",
    Wallets => "/admin/wallets",
    PennyPrime => "/admin/penny-prime",
    Reports => "/admin/reports",
}
