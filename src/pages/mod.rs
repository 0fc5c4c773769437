//! Page components for Folio Hero.

mod landing;

pub use landing::Landing;
