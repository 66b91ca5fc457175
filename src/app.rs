use dioxus::prelude::*;
use tracing::info;

use crate::{
    domain::AppState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{CalculatorPage, MethodologyPage},
        shell::Shell,
    },
    util::{
        assets,
        version::{version_label, APP_NAME},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
    #[route("/methodology")]
    Methodology {},
}

#[component]
pub fn App() -> Element {
    use_hook(|| info!(version = %version_label(), "starting {APP_NAME}"));

    let state = use_signal(AppState::default);
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn Methodology() -> Element {
    rsx! { Shell { MethodologyPage {} } }
}
