//! Wordle word representation
//!
//! A [`Word`] stores a 5-letter lowercase word; a [`Candidate`] pairs it with
//! a precomputed letter frequency table for repeated filtering.

use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word contains non-letter character '{0}'")]
    InvalidCharacter(char),
}

/// Index of an ASCII lowercase letter in `0..26`
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// A 5-letter Wordle word
///
/// Always lowercase ASCII; equality and hashing are by text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    chars: [u8; WORD_LEN],
}

impl Word {
    /// Fallback guess offered when no candidate remains
    pub const SENTINEL: Self = Self { chars: *b"aaaaa" };

    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly 5 ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let count = text.chars().count();
        if count != WORD_LEN {
            return Err(WordError::InvalidLength(count));
        }

        let mut chars = [0u8; WORD_LEN];
        for (slot, ch) in chars.iter_mut().zip(text.chars()) {
            if !ch.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacter(ch));
            }
            *slot = ch.to_ascii_lowercase() as u8;
        }

        Ok(Self { chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Construction only admits ASCII letters
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        LetterCounts::of(&self.chars)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Letter frequency table indexed by letter identity
///
/// Letters that do not occur read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCounts([u8; ALPHABET_LEN]);

impl LetterCounts {
    /// Count the letters of a word
    #[must_use]
    pub fn of(chars: &[u8; WORD_LEN]) -> Self {
        let mut counts = Self::default();
        for &ch in chars {
            counts.increment(ch);
        }
        counts
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, letter: u8) -> u8 {
        self.0[letter_index(letter)]
    }

    #[inline]
    pub fn increment(&mut self, letter: u8) {
        self.0[letter_index(letter)] += 1;
    }

    /// Decrement a letter, returning `false` if none remained
    #[inline]
    pub fn take(&mut self, letter: u8) -> bool {
        let slot = &mut self.0[letter_index(letter)];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }
}

/// A word that may still be the solution, with its letter counts cached
#[derive(Debug, Clone)]
pub struct Candidate {
    word: Word,
    counts: LetterCounts,
}

impl Candidate {
    #[must_use]
    pub fn new(word: Word) -> Self {
        let counts = word.letter_counts();
        Self { word, counts }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &LetterCounts {
        &self.counts
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        self.word.text()
    }
}

impl From<Word> for Candidate {
    fn from(word: Word) -> Self {
        Self::new(word)
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for Candidate {}

impl Hash for Candidate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word.hash(state);
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.word.fmt(f)
    }
}
