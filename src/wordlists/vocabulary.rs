//! Accepted vocabulary and solution drawing

use super::embedded::{FALLBACK, WORDS};
use crate::core::Word;
use rand::Rng;
use rand::rngs::ThreadRng;
use rustc_hash::FxHashSet;
use tracing::{info, warn};

/// The set of submittable words, also the pool solutions are drawn from
///
/// Never empty: if the source yields no valid word the built-in fallback is used.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
    fallback: bool,
}

impl Vocabulary {
    /// Build a vocabulary from raw entries
    ///
    /// Entries are trimmed and uppercased; anything that is not a valid
    /// [`Word`] is skipped and duplicates keep their first position.
    ///
    /// # Examples
    /// ```
    /// use hadej_slovo::wordlists::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_words(["kočka", "KOČKA", "pes"]);
    /// assert_eq!(vocab.len(), 1);
    /// assert!(!vocab.is_fallback());
    /// ```
    pub fn from_words<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();

        for entry in raw {
            if let Ok(word) = Word::new(entry.as_ref())
                && index.insert(word)
            {
                words.push(word);
            }
        }

        if words.is_empty() {
            warn!("word source produced no valid words, using fallback vocabulary");
            return Self::fallback();
        }

        info!(count = words.len(), "vocabulary loaded");
        Self {
            words,
            index,
            fallback: false,
        }
    }

    /// The built-in fallback vocabulary
    #[must_use]
    pub fn fallback() -> Self {
        let words: Vec<Word> = FALLBACK.iter().filter_map(|w| Word::new(w).ok()).collect();
        let index = words.iter().copied().collect();
        Self {
            words,
            index,
            fallback: true,
        }
    }

    /// Vocabulary from the list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(WORDS)
    }

    /// Check whether a word may be submitted
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// All words in source order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the built-in fallback is in use
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Draw a word uniformly at random
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Word {
        self.words[rng.random_range(0..self.words.len())]
    }
}

/// Source of solutions for new sessions
pub trait WordPicker {
    /// Choose the solution for the next session
    fn pick(&mut self, vocabulary: &Vocabulary) -> Word;
}

/// Uniform random picker
pub struct RandomPicker<R = ThreadRng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomPicker<ThreadRng> {
    fn default() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> WordPicker for RandomPicker<R> {
    fn pick(&mut self, vocabulary: &Vocabulary) -> Word {
        vocabulary.pick(&mut self.rng)
    }
}
