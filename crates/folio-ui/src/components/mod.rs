//! Reusable UI components for the hero panel.

mod button;
mod lamp;

pub use button::*;
pub use lamp::*;
