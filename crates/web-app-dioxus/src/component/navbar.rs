use dioxus::prelude::*;

use crate::{
    Route, View,
    component::element::{ElementWithDescription, Icon},
};

const VERSION: &str = env!("QUICKFIT_VERSION");

#[component]
pub fn Navbar() -> Element {
    let mut menu_visible = use_signal(|| false);
    let view = use_context::<View>();
    let is_offline = view.read().is_offline();
    let navigator = use_navigator();

    let page_title = match use_route::<Route>() {
        Route::Workout {} => "Quick Workout Generator",
        Route::Log {} => "Log",
        Route::NotFound { .. } => "",
    };
    let go_up_target = match use_route::<Route>() {
        Route::Workout {} => None,
        Route::Log {} | Route::NotFound { .. } => Some(Route::Workout {}),
    };

    rsx! {
        nav {
            class: "navbar is-fixed-top is-primary has-shadow has-text-weight-bold",
            div {
                class: "container",
                div {
                    class: "navbar-brand is-flex-grow-1",
                    a {
                        class: "navbar-item is-size-5",
                        class: if go_up_target.is_none() { "has-text-primary" },
                        Icon {
                            name: "chevron-left",
                            onclick: {
                                let go_up_target = go_up_target.clone();
                                move |_| {
                                    if let Some(go_up_target) = &go_up_target {
                                        navigator.push(go_up_target.clone());
                                    }
                                }
                            },
                        }
                    }
                    div { class: "navbar-item is-size-5", "{page_title}" }
                    div { class: "mx-auto" }
                    if is_offline {
                        a {
                            class: "navbar-item is-size-5 mx-1",
                            ElementWithDescription {
                                description: "Offline",
                                right_aligned: true,
                                Icon { name: "plug-circle-xmark" }
                            }
                        }
                    }
                    a {
                        aria_expanded: menu_visible(),
                        aria_label: "menu",
                        class: "navbar-burger ml-0",
                        class: if menu_visible() { "is-active" },
                        role: "button",
                        onclick: move |_| { *menu_visible.write() = !menu_visible() },
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                    }
                }
                div {
                    class: "navbar-menu is-flex-grow-0",
                    class: if menu_visible() { "is-active" },
                    div {
                        class: "navbar-end",
                        a {
                            class: "navbar-item",
                            onclick: move |_| {
                                *menu_visible.write() = false;
                                navigator.push(Route::Log {});
                            },
                            Icon { name: "list" }
                            "Log"
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}

        p {
            class: "has-text-centered is-size-7 has-text-grey-light mt-6",
            "Version {VERSION}"
        }
    }
}
