//! Folio Hero UI Components
//!
//! Dioxus components shared by the hero panel:
//! - [`Button`] with primary and outline variants
//! - [`CloseButton`] for overlays
//! - [`Lamp`], the decorative backdrop behind the hero text
//!
//! Styling lives in CSS classes defined by the host app; these components
//! only pick class names.

pub mod components;

pub use components::*;
