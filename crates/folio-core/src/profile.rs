//! Identity, outbound links and contact details shown on the hero panel.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Who the portfolio belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    /// Profile URL, e.g. `https://github.com/<user>`
    pub github: String,
    /// Profile URL, e.g. `https://linkedin.com/in/<user>`
    pub linkedin: String,
}

impl PersonalInfo {
    /// Outbound profile links rendered under the call-to-action buttons.
    pub fn social_links(&self) -> Vec<SocialLink> {
        vec![
            SocialLink::new("GitHub", &self.github, LinkKind::Web),
            SocialLink::new("LinkedIn", &self.linkedin, LinkKind::Web),
        ]
    }

    pub fn contact_details(&self) -> ContactDetails {
        ContactDetails {
            email: self.email.clone(),
            phone: self.phone.clone(),
            location: self.location.clone(),
        }
    }
}

/// Where a link leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkKind {
    Web,
    Email,
    Phone,
}

/// A labelled outbound link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub kind: LinkKind,
}

impl SocialLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>, kind: LinkKind) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            kind,
        }
    }

    /// Web profiles open in a new browsing context; mail and phone links
    /// hand off to the system handler in place.
    pub fn opens_new_context(&self) -> bool {
        self.kind == LinkKind::Web
    }

    /// `target` attribute for the rendered anchor.
    pub fn target(&self) -> Option<&'static str> {
        self.opens_new_context().then_some("_blank")
    }

    /// `rel` attribute for the rendered anchor.
    pub fn rel(&self) -> Option<&'static str> {
        self.opens_new_context().then_some("noopener noreferrer")
    }
}

/// Rows of the contact overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Email,
    Phone,
    Location,
}

impl ContactField {
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::Location => "Location",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Static contact details rendered inside the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl ContactDetails {
    /// Rows in display order.
    pub fn entries(&self) -> [(ContactField, &str); 3] {
        [
            (ContactField::Email, self.email.as_str()),
            (ContactField::Phone, self.phone.as_str()),
            (ContactField::Location, self.location.as_str()),
        ]
    }

    pub fn email_link(&self) -> SocialLink {
        SocialLink::new("Email", format!("mailto:{}", self.email), LinkKind::Email)
    }

    pub fn phone_link(&self) -> SocialLink {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        SocialLink::new("Phone", format!("tel:{}", digits), LinkKind::Phone)
    }

    /// Link behind a contact row; location has none.
    pub fn link_for(&self, field: ContactField) -> Option<SocialLink> {
        match field {
            ContactField::Email => Some(self.email_link()),
            ContactField::Phone => Some(self.phone_link()),
            ContactField::Location => None,
        }
    }
}
