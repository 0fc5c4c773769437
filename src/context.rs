//! Config context provider for the hero panel.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let config = use_hero_config();
//! let name = config.read().personal.name.clone();
//! ```

use dioxus::prelude::*;
use folio_core::HeroConfig;

/// Get the hero configuration loaded from the command line.
pub fn get_config() -> HeroConfig {
    crate::get_config()
}

/// Hook to access the HeroConfig from context.
pub fn use_hero_config() -> Signal<HeroConfig> {
    use_context::<Signal<HeroConfig>>()
}
