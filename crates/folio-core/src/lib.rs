//! Folio Hero Core Library
//!
//! The engine behind the portfolio landing panel: a phrase-cycling
//! typewriter gated by visibility and by the contact overlay.
//!
//! ## Overview
//!
//! ```text
//! VisibilityLatch ──┐
//!                   ├── PauseGate ── watch<bool> ──> TypewriterEngine ── watch<TypewriterSnapshot> ──> renderer
//! overlay open ─────┘
//! ```
//!
//! The engine owns its [`Typewriter`] state on a single tokio task and arms
//! exactly one delay at a time. Every delay (per-character tick or the hold
//! after a full phrase) races the pause signal, so pausing or tearing down
//! cancels whatever was armed.
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{PauseGate, PhraseList, TypewriterEngine, TypewriterTiming, VisibilityLatch};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let phrases = PhraseList::new(["Rust developer", "Problem solver"])?;
//!     let gate = PauseGate::new(VisibilityLatch::new());
//!     let handle = TypewriterEngine::spawn(phrases, TypewriterTiming::default(), gate.subscribe())?;
//!
//!     gate.mark_visible();
//!
//!     let mut frames = handle.subscribe();
//!     while frames.changed().await.is_ok() {
//!         println!("{}", frames.borrow_and_update().text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod gate;
pub mod logging;
pub mod profile;
pub mod resume;
pub mod typewriter;
pub mod visibility;

// Re-exports
pub use config::HeroConfig;
pub use error::{HeroError, HeroResult};
pub use gate::{PauseGate, PauseInputs};
pub use profile::{ContactDetails, ContactField, LinkKind, PersonalInfo, SocialLink};
pub use resume::{default_download_dir, download_resume, ResumeAsset};
pub use typewriter::{
    PhraseList, Step, TickAction, Typewriter, TypewriterEngine, TypewriterHandle,
    TypewriterMode, TypewriterSnapshot, TypewriterTiming,
};
pub use visibility::VisibilityLatch;
