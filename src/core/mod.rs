//! Core domain types for Wordle
//!
//! Words, candidates with cached letter counts, and feedback colorings.
//! Everything here is pure and free of solver policy.

mod coloring;
mod word;

pub use coloring::{Color, Coloring, ColoringError};
pub use word::{ALPHABET_LEN, Candidate, LetterCounts, WORD_LEN, Word, WordError, letter_index};
