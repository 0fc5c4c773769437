//! Contact Modal Component
//!
//! "Let's Connect!" overlay with email, phone, location and profile links.
//! While it is open the typewriter is paused (the owner feeds `show` into
//! the pause gate).

use dioxus::prelude::*;
use folio_core::{ContactDetails, ContactField, SocialLink};
use folio_ui::{button_class, Button, ButtonSize, ButtonVariant, CloseButton};

fn field_icon(field: ContactField) -> &'static str {
    match field {
        ContactField::Email => "✉",
        ContactField::Phone => "☎",
        ContactField::Location => "⌖",
    }
}

/// Contact Modal
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ContactModal {
///         show: show_contact(),
///         details: info.contact_details(),
///         links: info.social_links(),
///         on_close: move |_| show_contact.set(false),
///     }
/// }
/// ```
#[component]
pub fn ContactModal(
    /// Whether to show the modal
    show: bool,
    details: ContactDetails,
    /// Profile links rendered as buttons under the details
    links: Vec<SocialLink>,
    /// Callback when modal is closed
    on_close: EventHandler<()>,
) -> Element {
    if !show {
        return rsx! {};
    }

    let link_class = button_class(ButtonVariant::Outline, ButtonSize::Medium, Some("contact-link"));

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "contact-modal",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h3 { class: "modal-title", "Let's Connect!" }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }
                p { class: "modal-description", "Ready to discuss opportunities" }

                div { class: "contact-rows",
                    for (field, value) in details.entries() {
                        div { key: "{field}", class: "contact-row",
                            span { class: "contact-icon", "{field_icon(field)}" }
                            div {
                                p { class: "contact-label", "{field}" }
                                if let Some(link) = details.link_for(field) {
                                    a { class: "contact-value", href: "{link.href}", "{value}" }
                                } else {
                                    p { class: "contact-value", "{value}" }
                                }
                            }
                        }
                    }
                }

                div { class: "contact-links",
                    for link in links {
                        a {
                            key: "{link.label}",
                            class: "{link_class}",
                            href: "{link.href}",
                            target: link.target(),
                            rel: link.rel(),
                            "{link.label}"
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Outline,
                    class: "modal-close".to_string(),
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}
