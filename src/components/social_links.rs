//! Social Links - round profile badges under the call-to-action buttons.

use dioxus::prelude::*;
use folio_core::SocialLink;

/// Short badge text for a link (icons are not rendered).
pub fn badge_text(label: &str) -> String {
    match label {
        "GitHub" => "GH".to_string(),
        "LinkedIn" => "in".to_string(),
        other => other.chars().take(2).collect(),
    }
}

/// Row of outbound profile links.
///
/// Web profiles open in a new browsing context (the system browser on
/// desktop); mail and phone links do not.
#[component]
pub fn SocialLinks(links: Vec<SocialLink>) -> Element {
    rsx! {
        nav { class: "hero-social",
            for link in links {
                a {
                    key: "{link.label}",
                    class: "social-badge",
                    href: "{link.href}",
                    target: link.target(),
                    rel: link.rel(),
                    "aria-label": "{link.label}",
                    title: "{link.label}",
                    "{badge_text(&link.label)}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_text_for_known_and_unknown_labels() {
        assert_eq!(badge_text("GitHub"), "GH");
        assert_eq!(badge_text("LinkedIn"), "in");
        assert_eq!(badge_text("Mastodon"), "Ma");
    }
}
