use dioxus::prelude::*;

use crate::app::components::AdminLayout;

/// Unknown paths; the shell header falls back to "Admin".
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "No route matched");

    rsx! {
        AdminLayout {
            div { class: "space-y-2",
                h1 { class: "text-2xl font-bold tracking-tight", "Page not found" }
                p { class: "text-sm text-muted-foreground", "Nothing lives at {path}." }
            }
        }
    }
}
