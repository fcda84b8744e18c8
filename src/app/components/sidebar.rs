//! Fixed desktop sidebar (lg and up).

use dioxus::prelude::*;

use super::footer::AccountFooter;
use super::nav::{Branding, NavLinks};
use crate::nav::NavItem;

#[derive(Props, Clone, PartialEq)]
pub struct DesktopSidebarProps {
    pub items: Vec<&'static NavItem>,
    pub current_path: String,
    pub email: String,
    pub on_store: EventHandler<()>,
    pub on_sign_out: EventHandler<()>,
}

#[component]
pub fn DesktopSidebar(props: DesktopSidebarProps) -> Element {
    rsx! {
        aside { class: "hidden w-64 flex-col border-r bg-card lg:flex",
            Branding {}
            nav { class: "flex-1 space-y-1 overflow-y-auto p-4",
                NavLinks { items: props.items.clone(), current_path: props.current_path.clone() }
            }
            AccountFooter {
                email: props.email.clone(),
                on_store: props.on_store,
                on_sign_out: props.on_sign_out,
            }
        }
    }
}
