//! Mobile top bar with the slide-out navigation drawer (below lg).

use dioxus::prelude::*;

use super::button::{Button, ButtonSize, ButtonVariant};
use super::footer::AccountFooter;
use super::icons::Icon;
use super::nav::{Branding, NavLinks};
use super::sheet::Sheet;
use crate::nav::{DrawerEvent, DrawerState, NavIcon, NavItem};

fn transition(mut drawer: Signal<DrawerState>, event: DrawerEvent) {
    let current = *drawer.peek();
    let next = current.apply(event);
    if next != current {
        tracing::debug!(?event, from = ?current, to = ?next, "Drawer transition");
        drawer.set(next);
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct MobileTopBarProps {
    pub items: Vec<&'static NavItem>,
    pub current_path: String,
    /// Title for the current page ("Admin" when nothing matches)
    pub page_label: String,
    pub email: String,
    pub on_store: EventHandler<()>,
    pub on_sign_out: EventHandler<()>,
}

#[component]
pub fn MobileTopBar(props: MobileTopBarProps) -> Element {
    let drawer = use_signal(DrawerState::default);
    let on_store = props.on_store;
    let on_sign_out = props.on_sign_out;

    rsx! {
        header { class: "flex h-14 items-center justify-between border-b bg-card px-4 lg:hidden",
            Sheet {
                open: drawer().is_open(),
                on_open_change: move |open: bool| transition(drawer, DrawerEvent::from_open_request(open)),
                class: "flex w-72 flex-col p-0",
                trigger: rsx! {
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        label: "Open menu".to_string(),
                        Icon { icon: NavIcon::Menu, class: "h-5 w-5" }
                    }
                },
                Branding { height: "h-14", text_size: "text-base" }
                nav { class: "flex-1 space-y-1 overflow-y-auto p-4",
                    NavLinks {
                        items: props.items.clone(),
                        current_path: props.current_path.clone(),
                        on_navigate: move |_| transition(drawer, DrawerEvent::Navigate),
                    }
                }
                AccountFooter {
                    email: props.email.clone(),
                    on_store: move |_| {
                        on_store.call(());
                        transition(drawer, DrawerEvent::Store);
                    },
                    on_sign_out: move |_| {
                        on_sign_out.call(());
                        transition(drawer, DrawerEvent::SignOut);
                    },
                }
            }

            span { class: "font-semibold text-sm", "{props.page_label}" }

            // Quick actions, independent of the drawer
            div { class: "flex items-center gap-1",
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    label: "Back to store".to_string(),
                    onclick: move |_| on_store.call(()),
                    Icon { icon: NavIcon::ChevronLeft, class: "h-4 w-4" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    label: "Sign out".to_string(),
                    onclick: move |_| on_sign_out.call(()),
                    Icon { icon: NavIcon::LogOut, class: "h-4 w-4" }
                }
            }
        }
    }
}
