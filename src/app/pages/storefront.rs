//! Storefront landing page (target of the shell's "Store" action).

use dioxus::prelude::*;

use crate::app::session::use_auth;
use crate::app::Route;

#[component]
pub fn Storefront() -> Element {
    let auth = use_auth();
    let profile = auth.profile();

    rsx! {
        document::Title { "Store" }
        main { class: "mx-auto max-w-3xl space-y-4 p-6",
            h1 { class: "text-3xl font-bold", "Store" }
            if let Some(email) = profile.and_then(|p| p.email) {
                p { class: "text-sm text-muted-foreground", "Signed in as {email}" }
            }
            Link {
                to: Route::Dashboard {},
                class: "inline-flex text-sm font-medium text-primary hover:underline",
                "Go to admin"
            }
        }
    }
}
