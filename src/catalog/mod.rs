//! Candidate catalog
//!
//! The set of words that may still be the solution, plus a per-position
//! index from letter to the candidates holding that letter there. A catalog
//! is never mutated after construction: filtering builds a new one, and the
//! index is rebuilt from scratch alongside it.

mod filter;

pub use filter::{Constraint, count_consistent, filter};

use crate::core::{ALPHABET_LEN, Candidate, Coloring, WORD_LEN, Word, letter_index};
use rustc_hash::FxHashSet;

/// Candidate positions grouped by (position, letter)
#[derive(Debug, Clone)]
struct PositionIndex {
    buckets: [[Vec<u32>; ALPHABET_LEN]; WORD_LEN],
}

impl PositionIndex {
    fn build(candidates: &[Candidate]) -> Self {
        let mut buckets: [[Vec<u32>; ALPHABET_LEN]; WORD_LEN] =
            std::array::from_fn(|_| std::array::from_fn(|_| Vec::new()));

        for (idx, candidate) in candidates.iter().enumerate() {
            for (position, &letter) in candidate.word().chars().iter().enumerate() {
                buckets[position][letter_index(letter)].push(idx as u32);
            }
        }

        Self { buckets }
    }

    fn bucket(&self, position: usize, letter: u8) -> &[u32] {
        &self.buckets[position][letter_index(letter)]
    }

    fn distinct_letters(&self, position: usize) -> usize {
        self.buckets[position]
            .iter()
            .filter(|bucket| !bucket.is_empty())
            .count()
    }
}

/// An immutable, ordered set of candidates with its position index
///
/// Iteration order is the order words were first supplied, which keeps
/// every downstream computation reproducible.
#[derive(Debug, Clone)]
pub struct Catalog {
    candidates: Vec<Candidate>,
    index: PositionIndex,
}

impl Catalog {
    /// Build a catalog from words, dropping repeats (first occurrence wins)
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::catalog::Catalog;
    /// use wordle_entropy::core::Word;
    ///
    /// let catalog: Catalog = ["crane", "slate", "crane"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// assert_eq!(catalog.len(), 2);
    /// ```
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        let mut seen = FxHashSet::default();
        let candidates = words
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .map(Candidate::new)
            .collect();

        Self::from_unique(candidates)
    }

    /// Build from candidates already known to be distinct
    pub(crate) fn from_unique(candidates: Vec<Candidate>) -> Self {
        let index = PositionIndex::build(&candidates);
        Self { candidates, index }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.candidates.iter().any(|c| c.word() == word)
    }

    /// Candidates whose letter at `position` is `letter`, in catalog order
    pub fn bucket(&self, position: usize, letter: u8) -> impl Iterator<Item = &Candidate> + '_ {
        self.index
            .bucket(position, letter)
            .iter()
            .map(|&idx| &self.candidates[idx as usize])
    }

    pub(crate) fn bucket_indices(&self, position: usize, letter: u8) -> &[u32] {
        self.index.bucket(position, letter)
    }

    /// Number of different letters the candidates hold at `position`
    #[must_use]
    pub fn distinct_letters_at(&self, position: usize) -> usize {
        self.index.distinct_letters(position)
    }

    /// The new catalog of candidates consistent with `coloring` for `guess`
    #[must_use]
    pub fn filter(&self, guess: &Word, coloring: &Coloring) -> Self {
        filter(self, guess, coloring)
    }

    /// How many candidates are consistent with `coloring` for `guess`
    #[must_use]
    pub fn count_consistent(&self, guess: &Word, coloring: &Coloring) -> usize {
        count_consistent(self, guess, coloring)
    }
}

impl FromIterator<Word> for Catalog {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn catalog(words: &[&str]) -> Catalog {
        Catalog::new(words_from_slice(words))
    }

    fn texts<'a>(candidates: impl Iterator<Item = &'a Candidate>) -> Vec<&'a str> {
        candidates.map(Candidate::text).collect()
    }

    #[test]
    fn deduplicates_keeping_first_order() {
        let catalog = catalog(&["slate", "crane", "SLATE", "trace", "crane"]);
        assert_eq!(texts(catalog.iter()), ["slate", "crane", "trace"]);
    }

    #[test]
    fn index_partitions_by_position_and_letter() {
        let catalog = catalog(&["crane", "trace", "slate", "place"]);

        assert_eq!(texts(catalog.bucket(0, b'c')), ["crane"]);
        assert_eq!(texts(catalog.bucket(1, b'l')), ["slate", "place"]);
        assert_eq!(texts(catalog.bucket(2, b'a')).len(), 4);
        assert_eq!(catalog.bucket(0, b'z').count(), 0);

        for position in 0..WORD_LEN {
            let total: usize = (b'a'..=b'z')
                .map(|letter| catalog.bucket(position, letter).count())
                .sum();
            assert_eq!(total, catalog.len());
        }
    }

    #[test]
    fn distinct_letters_per_position() {
        let catalog = catalog(&["crane", "trace", "slate", "place"]);
        assert_eq!(catalog.distinct_letters_at(0), 4);
        assert_eq!(catalog.distinct_letters_at(1), 2);
        assert_eq!(catalog.distinct_letters_at(2), 1);
        assert_eq!(catalog.distinct_letters_at(3), 3);
        assert_eq!(catalog.distinct_letters_at(4), 1);
    }

    #[test]
    fn filtered_catalog_has_fresh_index() {
        let full = catalog(&["crane", "trace", "slate", "place"]);
        let guess = Word::new("crane").unwrap();
        let coloring = Coloring::color_for(&guess, &Word::new("slate").unwrap());

        let narrowed = full.filter(&guess, &coloring);

        assert_eq!(texts(narrowed.iter()), ["slate"]);
        assert_eq!(texts(narrowed.bucket(1, b'l')), ["slate"]);
        assert_eq!(narrowed.distinct_letters_at(0), 1);
        // The source catalog is untouched
        assert_eq!(full.len(), 4);
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.distinct_letters_at(0), 0);
    }
}
