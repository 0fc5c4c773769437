//! Lamp backdrop
//!
//! A cone of light above the hero text: two gradient wedges meeting at a
//! glowing bar. Purely decorative; all motion comes from CSS.

use dioxus::prelude::*;

/// Properties for the Lamp component
#[derive(Clone, PartialEq, Props)]
pub struct LampProps {
    /// Beam color (default: cyan #22d3ee)
    #[props(default = "#22d3ee".to_string())]
    pub color: String,
    /// Beam opacity (default: 0.6)
    #[props(default = 0.6)]
    pub intensity: f32,
    /// Content rendered in front of the beam
    pub children: Element,
}

/// Inline style for the beam layer.
pub fn beam_style(color: &str, intensity: f32) -> String {
    let intensity = intensity.clamp(0.0, 1.0);
    format!("--lamp-color: {}; opacity: {:.2};", color, intensity)
}

/// Wraps content in the lamp backdrop
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Lamp {
///         h1 { "Hi, I'm Ada" }
///     }
/// }
/// ```
#[component]
pub fn Lamp(props: LampProps) -> Element {
    let style = beam_style(&props.color, props.intensity);

    rsx! {
        div { class: "lamp-container",
            div {
                class: "lamp-beam",
                style: "{style}",
                "aria-hidden": "true",
                div { class: "lamp-cone lamp-cone-left" }
                div { class: "lamp-cone lamp-cone-right" }
                div { class: "lamp-bar" }
                div { class: "lamp-glow" }
            }
            div { class: "lamp-content", {props.children} }
        }
    }
}
