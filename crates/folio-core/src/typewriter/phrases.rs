//! The rotating list of phrases the typewriter cycles through.

use crate::error::{HeroError, HeroResult};

/// Ordered, non-empty list of display phrases.
///
/// Fixed for the lifetime of a [`Typewriter`](super::Typewriter). Lengths are
/// counted in `char`s and cached so a tick never rescans the phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseList {
    phrases: Vec<String>,
    char_lens: Vec<usize>,
}

#[allow(clippy::len_without_is_empty)]
impl PhraseList {
    /// Build a phrase list, rejecting an empty one.
    pub fn new<I, S>(phrases: I) -> HeroResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(HeroError::InvalidConfiguration(
                "phrase list must contain at least one phrase".to_string(),
            ));
        }

        let char_lens = phrases.iter().map(|p| p.chars().count()).collect();
        Ok(Self { phrases, char_lens })
    }

    /// Number of phrases (always at least 1).
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Phrase at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn phrase(&self, index: usize) -> &str {
        &self.phrases[index]
    }

    /// Length of the phrase at `index` in chars.
    pub fn char_len(&self, index: usize) -> usize {
        self.char_lens[index]
    }

    /// Index that follows `index`, wrapping to the start.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.phrases.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.phrases
    }
}

impl TryFrom<Vec<String>> for PhraseList {
    type Error = HeroError;

    fn try_from(phrases: Vec<String>) -> HeroResult<Self> {
        Self::new(phrases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_rejected() {
        let err = PhraseList::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, HeroError::InvalidConfiguration(_)));
    }

    #[test]
    fn empty_phrase_is_allowed() {
        let list = PhraseList::new([""]).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.char_len(0), 0);
    }

    #[test]
    fn char_len_counts_scalars_not_bytes() {
        let list = PhraseList::new(["Café", "日本"]).unwrap();
        assert_eq!(list.char_len(0), 4);
        assert_eq!(list.char_len(1), 2);
    }

    #[test]
    fn next_index_wraps() {
        let list = PhraseList::new(["a", "b", "c"]).unwrap();
        assert_eq!(list.next_index(0), 1);
        assert_eq!(list.next_index(2), 0);

        let single = PhraseList::new(["only"]).unwrap();
        assert_eq!(single.next_index(0), 0);
    }
}
