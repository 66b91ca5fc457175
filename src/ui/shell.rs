use dioxus::prelude::*;

use crate::{
    app::Route,
    ui::theme,
    util::version::{feedback_href, version_label, APP_NAME, APP_TITLE, FEEDBACK_EMAIL},
};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let version = version_label();
    let feedback = feedback_href();

    rsx! {
        div { class: "app",
            header { class: "app-header",
                div { class: "app-header__inner",
                    div {
                        p { class: "app-name", "{APP_NAME}" }
                        h1 { class: "app-title", "{APP_TITLE}" }
                    }
                    nav { class: "app-nav",
                        NavButton {
                            active: matches!(current_route, Route::Calculator {}),
                            onclick: move |_| { nav.push(Route::Calculator {}); },
                            label: "Calculator",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Methodology {}),
                            onclick: move |_| { nav.push(Route::Methodology {}); },
                            label: "Methodology",
                        }
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
            footer { class: "app-footer",
                p {
                    strong { "Note: " }
                    "Not included are costs relating to: peer reviewer or panel time, university administrative costs in creating funding applications."
                }
                p { class: "{theme::MUTED}",
                    "Prototype version - feedback very welcome: "
                    a { href: "{feedback}", "{FEEDBACK_EMAIL}" }
                    " {version}"
                }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
