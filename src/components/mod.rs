//! UI Components for the hero panel.

mod contact_modal;
mod hero;
mod social_links;
mod typewriter_line;

pub use contact_modal::ContactModal;
pub use hero::Hero;
pub use social_links::SocialLinks;
pub use typewriter_line::{use_typewriter, TypewriterLine};
