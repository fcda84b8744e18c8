//! Controlled slide-out panel.

use dioxus::prelude::*;

use super::icons::Icon;
use crate::nav::NavIcon;

#[derive(Props, Clone, PartialEq)]
pub struct SheetProps {
    /// Whether the panel is shown
    pub open: bool,
    /// Requested open state (trigger press, close button, backdrop)
    pub on_open_change: EventHandler<bool>,
    /// Element that opens the panel when clicked
    pub trigger: Element,
    /// Classes for the panel (width, padding)
    #[props(default)]
    pub class: String,
    pub children: Element,
}

/// Left-side sheet. The caller owns the open state.
#[component]
pub fn Sheet(props: SheetProps) -> Element {
    let on_open_change = props.on_open_change;

    rsx! {
        span { onclick: move |_| on_open_change.call(true), {props.trigger} }

        if props.open {
            // Backdrop
            div {
                class: "fixed inset-0 z-50 bg-black/80",
                onclick: move |_| on_open_change.call(false),
            }

            div {
                class: "fixed inset-y-0 left-0 z-50 h-full border-r bg-card shadow-lg {props.class}",
                role: "dialog",
                "aria-modal": "true",
                button {
                    class: "absolute right-4 top-4 rounded-sm opacity-70 transition-opacity hover:opacity-100",
                    r#type: "button",
                    onclick: move |_| on_open_change.call(false),
                    Icon { icon: NavIcon::X }
                    span { class: "sr-only", "Close" }
                }
                {props.children}
            }
        }
    }
}
