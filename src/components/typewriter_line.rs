//! Typewriter line - "I'm a <phrase>|"
//!
//! The component only renders snapshots; the engine task owns the state.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{
    PauseGate, PhraseList, TypewriterEngine, TypewriterMode, TypewriterSnapshot, TypewriterTiming,
};

/// Spawn a typewriter engine for the lifetime of the calling component and
/// mirror its snapshots into a signal.
///
/// The engine is shut down when the component is dropped, cancelling any
/// armed delay. If the engine refuses the timing, the line stays empty.
pub fn use_typewriter(
    phrases: PhraseList,
    timing: TypewriterTiming,
    gate: PauseGate,
) -> Signal<TypewriterSnapshot> {
    let handle = use_hook(move || {
        match TypewriterEngine::spawn(phrases, timing, gate.subscribe()) {
            Ok(handle) => Some(Rc::new(handle)),
            Err(e) => {
                tracing::error!("Typewriter engine not started: {}", e);
                None
            }
        }
    });
    let mut snapshot = use_signal(|| {
        handle
            .as_ref()
            .map(|h| h.snapshot())
            .unwrap_or_default()
    });

    let frames_handle = handle.clone();
    use_future(move || {
        let frames = frames_handle.as_ref().map(|h| h.subscribe());
        async move {
            let Some(mut frames) = frames else {
                return;
            };
            while frames.changed().await.is_ok() {
                let next = frames.borrow_and_update().clone();
                snapshot.set(next);
            }
        }
    });

    use_drop(move || {
        if let Some(handle) = &handle {
            handle.shutdown();
        }
    });

    snapshot
}

/// CSS classes for the caret after the typed text.
pub fn caret_class(snapshot: &TypewriterSnapshot) -> &'static str {
    if snapshot.paused {
        "caret caret-paused"
    } else {
        match snapshot.mode {
            TypewriterMode::Typing => "caret caret-typing",
            TypewriterMode::Deleting => "caret caret-deleting",
        }
    }
}

/// Renders the typed text with a blinking caret.
#[component]
pub fn TypewriterLine(snapshot: TypewriterSnapshot) -> Element {
    let caret = caret_class(&snapshot);

    rsx! {
        h2 { class: "hero-role",
            "I'm a "
            span { class: "hero-typed",
                "{snapshot.text}"
                span { class: "{caret}", "|" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_reflects_mode_and_pause() {
        let mut snapshot = TypewriterSnapshot::default();
        assert_eq!(caret_class(&snapshot), "caret caret-typing");

        snapshot.mode = TypewriterMode::Deleting;
        assert_eq!(caret_class(&snapshot), "caret caret-deleting");

        snapshot.paused = true;
        assert_eq!(caret_class(&snapshot), "caret caret-paused");
    }
}
