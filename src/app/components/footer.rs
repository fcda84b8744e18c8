//! Account footer: email plus "Store" and sign-out actions.

use dioxus::prelude::*;

use super::button::{Button, ButtonSize, ButtonVariant};
use super::icons::Icon;
use crate::nav::NavIcon;

#[derive(Props, Clone, PartialEq)]
pub struct AccountFooterProps {
    /// Empty when no profile is loaded
    pub email: String,
    pub on_store: EventHandler<()>,
    pub on_sign_out: EventHandler<()>,
}

#[component]
pub fn AccountFooter(props: AccountFooterProps) -> Element {
    let on_store = props.on_store;
    let on_sign_out = props.on_sign_out;

    rsx! {
        div { class: "border-t p-4",
            p { class: "mb-2 truncate text-xs text-muted-foreground", "{props.email}" }
            div { class: "flex gap-2",
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Sm,
                    class: "flex-1",
                    onclick: move |_| on_store.call(()),
                    Icon { icon: NavIcon::ChevronLeft, class: "mr-1 h-3 w-3" }
                    "Store"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Sm,
                    label: "Sign out".to_string(),
                    onclick: move |_| on_sign_out.call(()),
                    Icon { icon: NavIcon::LogOut, class: "h-3 w-3" }
                }
            }
        }
    }
}
