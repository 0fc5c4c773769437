//! Pure typewriter state machine.
//!
//! No clocks live here: [`Typewriter::next_step`] names the action the
//! current state is waiting on and how long to wait, and
//! [`Typewriter::advance`] performs it. The driver in `engine.rs` supplies
//! the waiting.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::phrases::PhraseList;
use super::timing::TypewriterTiming;

/// Whether the typewriter is growing or shrinking the current phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TypewriterMode {
    #[default]
    Typing,
    Deleting,
}

impl fmt::Display for TypewriterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypewriterMode::Typing => write!(f, "typing"),
            TypewriterMode::Deleting => write!(f, "deleting"),
        }
    }
}

/// The transition a state is waiting to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAction {
    /// Append the next char of the current phrase
    TypeChar,
    /// Hold elapsed: start deleting
    StartDeleting,
    /// Remove the last char
    DeleteChar,
    /// Text is empty: move to the next phrase and start typing
    NextPhrase,
}

/// The next scheduled transition and how long to wait for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub delay: Duration,
    pub action: TickAction,
}

/// Read-only projection of the typewriter handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TypewriterSnapshot {
    pub text: String,
    pub mode: TypewriterMode,
    pub phrase_index: usize,
    /// Completed type/hold/delete cycles since start
    pub cycle: u64,
    pub paused: bool,
}

/// Typewriter state: phrase index, typed length and mode.
///
/// The displayed text is never stored separately; it is always the first
/// `typed` chars of the current phrase, so it cannot drift from the phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    phrases: PhraseList,
    phrase_index: usize,
    typed: usize,
    mode: TypewriterMode,
    cycle: u64,
}

impl Typewriter {
    /// Fresh typewriter: first phrase, nothing typed, typing.
    pub fn new(phrases: PhraseList) -> Self {
        Self {
            phrases,
            phrase_index: 0,
            typed: 0,
            mode: TypewriterMode::Typing,
            cycle: 0,
        }
    }

    pub fn phrases(&self) -> &PhraseList {
        &self.phrases
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn mode(&self) -> TypewriterMode {
        self.mode
    }

    /// Number of phrases fully typed and deleted so far.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// The phrase currently being typed or deleted.
    pub fn target(&self) -> &str {
        self.phrases.phrase(self.phrase_index)
    }

    /// Number of chars currently shown.
    pub fn typed_len(&self) -> usize {
        self.typed
    }

    /// The visible prefix of the current phrase.
    pub fn display_text(&self) -> &str {
        let target = self.target();
        let end = target
            .char_indices()
            .nth(self.typed)
            .map(|(offset, _)| offset)
            .unwrap_or(target.len());
        &target[..end]
    }

    fn target_len(&self) -> usize {
        self.phrases.char_len(self.phrase_index)
    }

    /// The transition the current state is waiting on.
    pub fn pending_action(&self) -> TickAction {
        match self.mode {
            TypewriterMode::Typing if self.typed < self.target_len() => TickAction::TypeChar,
            TypewriterMode::Typing => TickAction::StartDeleting,
            TypewriterMode::Deleting if self.typed > 0 => TickAction::DeleteChar,
            TypewriterMode::Deleting => TickAction::NextPhrase,
        }
    }

    /// What the current state is waiting to do, and for how long.
    pub fn next_step(&self, timing: &TypewriterTiming) -> Step {
        let action = self.pending_action();
        let delay = match action {
            TickAction::TypeChar => timing.type_delay,
            TickAction::StartDeleting => timing.hold_delay,
            TickAction::DeleteChar => timing.delete_delay,
            TickAction::NextPhrase => Duration::ZERO,
        };
        Step { delay, action }
    }

    /// Perform the transition the current state is waiting on.
    pub fn advance(&mut self) -> TickAction {
        let action = self.pending_action();
        match action {
            TickAction::TypeChar => {
                self.typed += 1;
                trace!(text = %self.display_text(), "typed");
            }
            TickAction::StartDeleting => {
                self.mode = TypewriterMode::Deleting;
                debug!(phrase = self.phrase_index, "hold elapsed, deleting");
            }
            TickAction::DeleteChar => {
                self.typed -= 1;
                trace!(text = %self.display_text(), "deleted");
            }
            TickAction::NextPhrase => {
                self.mode = TypewriterMode::Typing;
                self.phrase_index = self.phrases.next_index(self.phrase_index);
                self.cycle += 1;
                debug!(phrase = self.phrase_index, "advanced to next phrase");
            }
        }
        action
    }

    pub fn snapshot(&self, paused: bool) -> TypewriterSnapshot {
        TypewriterSnapshot {
            text: self.display_text().to_string(),
            mode: self.mode,
            phrase_index: self.phrase_index,
            cycle: self.cycle,
            paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typewriter(phrases: &[&str]) -> Typewriter {
        Typewriter::new(PhraseList::new(phrases.iter().copied()).unwrap())
    }

    #[test]
    fn starts_typing_first_phrase_from_empty() {
        let tw = typewriter(&["Go", "Rust"]);
        assert_eq!(tw.display_text(), "");
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.mode(), TypewriterMode::Typing);
    }

    #[test]
    fn step_table_matches_state() {
        let timing = TypewriterTiming::default();
        let mut tw = typewriter(&["Go"]);

        assert_eq!(
            tw.next_step(&timing),
            Step { delay: Duration::from_millis(100), action: TickAction::TypeChar }
        );
        tw.advance();
        tw.advance();
        assert_eq!(
            tw.next_step(&timing),
            Step { delay: Duration::from_millis(2000), action: TickAction::StartDeleting }
        );
        tw.advance();
        assert_eq!(
            tw.next_step(&timing),
            Step { delay: Duration::from_millis(50), action: TickAction::DeleteChar }
        );
        tw.advance();
        tw.advance();
        assert_eq!(
            tw.next_step(&timing),
            Step { delay: Duration::ZERO, action: TickAction::NextPhrase }
        );
    }

    #[test]
    fn types_full_phrase_in_len_ticks() {
        let mut tw = typewriter(&["Rust"]);
        for _ in 0..4 {
            assert_eq!(tw.advance(), TickAction::TypeChar);
        }
        assert_eq!(tw.display_text(), "Rust");
        assert_eq!(tw.mode(), TypewriterMode::Typing);
    }

    #[test]
    fn hold_then_delete_advances_index() {
        let mut tw = typewriter(&["ab", "c"]);
        tw.advance();
        tw.advance();
        assert_eq!(tw.advance(), TickAction::StartDeleting);
        assert_eq!(tw.display_text(), "ab");

        assert_eq!(tw.advance(), TickAction::DeleteChar);
        assert_eq!(tw.display_text(), "a");
        assert_eq!(tw.advance(), TickAction::DeleteChar);
        assert_eq!(tw.display_text(), "");

        assert_eq!(tw.advance(), TickAction::NextPhrase);
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.mode(), TypewriterMode::Typing);
        assert_eq!(tw.target(), "c");
    }

    #[test]
    fn empty_phrase_goes_straight_to_hold() {
        let timing = TypewriterTiming::default();
        let mut tw = typewriter(&["", "x"]);
        assert_eq!(tw.next_step(&timing).action, TickAction::StartDeleting);
        tw.advance();
        assert_eq!(tw.next_step(&timing).action, TickAction::NextPhrase);
        tw.advance();
        assert_eq!(tw.phrase_index(), 1);
    }

    #[test]
    fn two_phrase_cycles_return_to_start() {
        let mut tw = typewriter(&["A", "BB"]);
        // "A": 1 type + hold + 1 delete + next; "BB": 2 type + hold + 2 delete + next
        let ticks_per_two_phrases = (1 + 1 + 1 + 1) + (2 + 1 + 2 + 1);
        for _ in 0..ticks_per_two_phrases * 2 {
            tw.advance();
            assert!(tw.target().starts_with(tw.display_text()));
        }
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.display_text(), "");
        assert_eq!(tw.mode(), TypewriterMode::Typing);
        assert_eq!(tw.cycle(), 4);
    }

    #[test]
    fn multibyte_phrases_slice_on_char_boundaries() {
        let mut tw = typewriter(&["Café"]);
        tw.advance();
        tw.advance();
        tw.advance();
        tw.advance();
        assert_eq!(tw.display_text(), "Café");
        tw.advance();
        tw.advance();
        assert_eq!(tw.display_text(), "Caf");
    }

    #[test]
    fn snapshot_projects_state() {
        let mut tw = typewriter(&["Hi"]);
        tw.advance();
        let snap = tw.snapshot(true);
        assert_eq!(
            snap,
            TypewriterSnapshot {
                text: "H".to_string(),
                mode: TypewriterMode::Typing,
                phrase_index: 0,
                cycle: 0,
                paused: true,
            }
        );
    }
}
