//! Navigation links and branding shared by the desktop and mobile shells.

use dioxus::prelude::*;

use super::icons::Icon;
use crate::nav::{is_active, link_class, NavIcon, NavItem};

#[derive(Props, Clone, PartialEq)]
pub struct NavLinksProps {
    /// Already filtered, in display order
    pub items: Vec<&'static NavItem>,
    pub current_path: String,
    /// Called after any link is activated (the drawer closes itself with it)
    pub on_navigate: Option<EventHandler<()>>,
}

/// Navigation links using Tailwind CSS; the link matching the current path
/// exactly is highlighted.
#[component]
pub fn NavLinks(props: NavLinksProps) -> Element {
    let on_navigate = props.on_navigate;

    rsx! {
        for item in props.items.iter().copied() {
            Link {
                key: "{item.path}",
                to: item.path.to_string(),
                class: link_class(is_active(item, &props.current_path)),
                onclick: move |_| {
                    if let Some(handler) = &on_navigate {
                        handler.call(());
                    }
                },
                Icon { icon: item.icon, class: "h-4 w-4 shrink-0" }
                "{item.label}"
            }
        }
    }
}

/// "Admin Panel" header used at the top of both shells.
#[component]
pub fn Branding(
    #[props(default = "h-16".to_string())] height: String,
    #[props(default = "text-lg".to_string())] text_size: String,
) -> Element {
    rsx! {
        div { class: "flex {height} items-center gap-2 border-b px-6",
            Icon { icon: NavIcon::Settings, class: "h-5 w-5 text-primary" }
            span { class: "{text_size} font-bold", "Admin Panel" }
        }
    }
}
