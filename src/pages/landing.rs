//! Landing page - the hero panel.

use dioxus::prelude::*;

use crate::components::Hero;
use crate::context::use_hero_config;

/// Landing page component.
///
/// An invalid phrase list is rejected at config load; if one still reaches
/// the page, the error is shown instead of the panel.
#[component]
pub fn Landing() -> Element {
    let config = use_hero_config();
    let config = config.read().clone();

    match config.phrase_list() {
        Ok(phrases) => rsx! {
            main { class: "landing",
                Hero { config, phrases }
            }
        },
        Err(e) => {
            tracing::error!("Cannot render hero panel: {}", e);
            rsx! {
                main { class: "landing",
                    p { class: "error-text", "⚠ {e}" }
                }
            }
        }
    }
}
