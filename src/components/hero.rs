//! Hero Panel
//!
//! Greeting, name, typewriter line, call-to-action buttons, social links and
//! location, over the lamp backdrop. Owns the pause gate that ties the
//! typewriter to panel visibility and to the contact overlay.

use dioxus::prelude::*;
use folio_core::{
    default_download_dir, download_resume, HeroConfig, HeroError, PauseGate, PhraseList,
    VisibilityLatch,
};
use folio_ui::{Button, ButtonSize, ButtonVariant, Lamp};

use super::contact_modal::ContactModal;
use super::social_links::SocialLinks;
use super::typewriter_line::{use_typewriter, TypewriterLine};

/// How long the resume download notice stays on screen.
const NOTICE_DURATION_SECS: u64 = 3;

/// Hero panel component.
#[component]
pub fn Hero(config: HeroConfig, phrases: PhraseList) -> Element {
    let gate = use_hook(|| PauseGate::new(VisibilityLatch::new()));
    let mut show_contact = use_signal(|| false);
    let mut observer_failed = use_signal(|| false);
    let mut notice: Signal<Option<String>> = use_signal(|| None);

    let snapshot = use_typewriter(phrases, config.timing, gate.clone());

    // The overlay pauses the typewriter while it is open
    let overlay_gate = gate.clone();
    use_effect(move || {
        overlay_gate.set_overlay_open(show_contact());
    });

    let visible_gate = gate.clone();
    let on_visible = move |evt: Event<VisibleData>| match evt.data().is_intersecting() {
        Ok(true) => visible_gate.mark_visible(),
        Ok(false) => {}
        Err(e) => {
            // Without an observer the latch never opens; report it once.
            if !observer_failed() {
                tracing::warn!(error = ?e, "{}", HeroError::MissingObserver);
                observer_failed.set(true);
            }
        }
    };

    let resume = config.resume.clone();
    let on_resume = move |_| {
        let message = match download_resume(&resume, &default_download_dir()) {
            Ok(path) => format!("Resume saved to {}", path.display()),
            Err(e) => {
                tracing::error!("Resume download failed: {}", e);
                format!("Download failed: {}", e)
            }
        };
        notice.set(Some(message));

        // Reset after a few seconds using tokio
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_secs(NOTICE_DURATION_SECS)).await;
            notice.set(None);
        });
    };

    let personal = &config.personal;

    rsx! {
        section {
            id: "home",
            class: "hero",
            onvisible: on_visible,

            Lamp {
                p { class: "hero-greeting", "Hi, I'm" }
                h1 { class: "hero-name", "{personal.name}" }

                TypewriterLine { snapshot: snapshot() }

                div { class: "hero-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Large,
                        onclick: on_resume,
                        "⬇ Download Resume"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Large,
                        onclick: move |_| show_contact.set(true),
                        "Get In Touch"
                    }
                }

                if let Some(message) = notice() {
                    p { class: "hero-notice", "{message}" }
                }

                SocialLinks { links: personal.social_links() }

                div { class: "hero-location",
                    span { class: "location-pin", "⌖" }
                    span { "{personal.location}" }
                }
            }

            ContactModal {
                show: show_contact(),
                details: personal.contact_details(),
                links: personal.social_links(),
                on_close: move |_| show_contact.set(false),
            }
        }
    }
}
