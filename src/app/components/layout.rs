//! Admin layout wrapping every admin page with the navigation shell.

use dioxus::prelude::*;

use super::mobile::MobileTopBar;
use super::sidebar::DesktopSidebar;
use crate::app::session::{use_auth, use_permissions};
use crate::app::Route;
use crate::nav::{current_page_label, visible_items, NAV_ITEMS};

/// Tailwind output, rebuilt from `tailwind.css` by `dx`. `asset!()` bundles it.
const TAILWIND: Asset = asset!("/assets/tailwind.css");

#[derive(Props, Clone, PartialEq)]
pub struct AdminLayoutProps {
    /// Page content
    pub children: Element,
}

/// Desktop sidebar plus mobile top bar around a single content area.
/// Which one shows is decided by the `lg` breakpoint.
#[component]
pub fn AdminLayout(props: AdminLayoutProps) -> Element {
    let auth = use_auth();
    let permissions = use_permissions();
    let navigator = navigator();
    let current_path = use_route::<Route>().to_string();

    let visible = visible_items(NAV_ITEMS, &permissions);
    let page_label = current_page_label(&current_path, &visible).to_string();
    let email = auth.email();

    let on_store = move |_: ()| {
        navigator.push(Route::Storefront {});
    };
    let on_sign_out = move |_: ()| auth.sign_out();

    rsx! {
        document::Title { "{page_label} - Admin Panel" }
        document::Link { rel: "stylesheet", href: TAILWIND }

        div { class: "flex min-h-screen bg-muted/40",
            DesktopSidebar {
                items: visible.clone(),
                current_path: current_path.clone(),
                email: email.clone(),
                on_store,
                on_sign_out,
            }

            div { class: "flex flex-1 flex-col",
                MobileTopBar {
                    items: visible,
                    current_path,
                    page_label,
                    email,
                    on_store,
                    on_sign_out,
                }
                main { class: "flex-1 p-4 lg:p-6", {props.children} }
            }
        }
    }
}
