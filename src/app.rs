use dioxus::prelude::*;

use crate::context::get_config;
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with the hero panel
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Root application component.
///
/// Provides global styles, the hero config context, and routing.
#[component]
pub fn App() -> Element {
    let config = use_signal(get_config);

    // Provide config context to all child components
    use_context_provider(|| config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
