//! Word lists for Wordle solving
//!
//! File loading plus a small sample dictionary compiled into the binary.

pub mod loader;

pub use loader::{LoadError, load_from_file, parse_words, words_from_slice};

use crate::catalog::Catalog;

/// Dictionary path used when none is given
pub const DEFAULT_WORDS_PATH: &str = "data/words.txt";

/// The bundled sample dictionary, one word per line
pub const SAMPLE_WORDS: &str = include_str!("../../data/words.txt");

/// Catalog over [`SAMPLE_WORDS`]
#[must_use]
pub fn sample_catalog() -> Catalog {
    parse_words(SAMPLE_WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn sample_words_are_valid() {
        for line in SAMPLE_WORDS.lines() {
            assert_eq!(line.len(), 5, "Word '{line}' is not 5 letters");
            assert!(
                line.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{line}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn sample_catalog_has_no_repeats() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), SAMPLE_WORDS.lines().count());
    }

    #[test]
    fn sample_catalog_contains_fixture_words() {
        let catalog = sample_catalog();
        for text in ["crane", "trace", "slate", "place"] {
            assert!(
                catalog.contains(&Word::new(text).unwrap()),
                "{text} missing"
            );
        }
    }
}
