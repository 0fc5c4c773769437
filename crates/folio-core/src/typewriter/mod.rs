//! Phrase-cycling typewriter
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Typewriter (pure state)                                        │
//! │  ├── Typing, partial   ──type_delay──>   append one char        │
//! │  ├── Typing, full      ──hold_delay──>   switch to Deleting     │
//! │  ├── Deleting, partial ──delete_delay──> remove one char        │
//! │  └── Deleting, empty   ──immediate──>    Typing, next phrase    │
//! │                                                                 │
//! │  TypewriterEngine (tokio task)                                  │
//! │  └── one armed delay, raced against the pause signal            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod engine;
mod phrases;
mod state;
mod timing;

pub use engine::{TypewriterEngine, TypewriterHandle};
pub use phrases::PhraseList;
pub use state::{Step, TickAction, Typewriter, TypewriterMode, TypewriterSnapshot};
pub use timing::{TypewriterTiming, DELETE_DELAY, HOLD_DELAY, TYPE_DELAY};
