//! Candidate filtering
//!
//! Narrows a catalog to the candidates consistent with one guess and the
//! coloring it received.

use super::Catalog;
use crate::core::{Candidate, Color, Coloring, LetterCounts, WORD_LEN, Word};

/// What a single (guess, coloring) pair says about the solution
#[derive(Debug, Clone)]
pub struct Constraint {
    guess: [u8; WORD_LEN],
    coloring: Coloring,
    guess_counts: LetterCounts,
    /// Occurrences of each letter credited Correct or Misplaced
    result_counts: LetterCounts,
}

impl Constraint {
    #[must_use]
    pub fn new(guess: &Word, coloring: &Coloring) -> Self {
        let mut result_counts = LetterCounts::default();
        for (&letter, color) in guess.chars().iter().zip(coloring.colors()) {
            if color.is_present() {
                result_counts.increment(letter);
            }
        }

        Self {
            guess: *guess.chars(),
            coloring: *coloring,
            guess_counts: guess.letter_counts(),
            result_counts,
        }
    }

    /// Whether `candidate` could be the solution under this constraint
    ///
    /// # Rules
    /// - Correct at `i`: the candidate has the guessed letter at `i`.
    /// - Misplaced or Absent at `i`: it does not.
    /// - For each guessed letter, if the guess used at least as many copies
    ///   as the candidate holds, the credited count must equal the
    ///   candidate's count; otherwise every guessed copy must be credited.
    #[must_use]
    pub fn admits(&self, candidate: &Candidate) -> bool {
        let word = candidate.word().chars();

        let positions_agree = word
            .iter()
            .zip(&self.guess)
            .zip(self.coloring.colors())
            .all(|((a, b), &color)| (a == b) == (color == Color::Correct));
        if !positions_agree {
            return false;
        }

        let counts = candidate.counts();
        self.guess.iter().all(|&letter| {
            let guessed = self.guess_counts.get(letter);
            let credited = self.result_counts.get(letter);
            let held = counts.get(letter);

            if guessed >= held {
                credited == held
            } else {
                credited == guessed
            }
        })
    }

    /// Smallest index bucket pinned by a Correct position, if any
    fn narrowest_bucket<'a>(&self, catalog: &'a Catalog) -> Option<&'a [u32]> {
        (0..WORD_LEN)
            .filter(|&i| self.coloring.at(i) == Color::Correct)
            .map(|i| catalog.bucket_indices(i, self.guess[i]))
            .min_by_key(|bucket| bucket.len())
    }
}

/// Visit surviving candidates in catalog order
fn for_each_survivor<'a, F>(catalog: &'a Catalog, constraint: &Constraint, mut visit: F)
where
    F: FnMut(&'a Candidate),
{
    match constraint.narrowest_bucket(catalog) {
        Some(bucket) => bucket
            .iter()
            .map(|&idx| &catalog.candidates()[idx as usize])
            .filter(|candidate| constraint.admits(candidate))
            .for_each(&mut visit),
        None => catalog
            .iter()
            .filter(|candidate| constraint.admits(candidate))
            .for_each(&mut visit),
    }
}

/// Build the catalog of candidates consistent with `coloring` for `guess`
///
/// The input catalog is left untouched; the result carries a freshly built
/// index.
///
/// # Examples
/// ```
/// use wordle_entropy::catalog::{Catalog, filter};
/// use wordle_entropy::core::{Coloring, Word};
///
/// let catalog: Catalog = ["crane", "trace", "slate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("crane").unwrap();
/// let narrowed = filter(&catalog, &guess, &"--G-G".parse().unwrap());
///
/// assert_eq!(narrowed.len(), 1);
/// assert_eq!(narrowed.candidates()[0].text(), "slate");
/// ```
#[must_use]
pub fn filter(catalog: &Catalog, guess: &Word, coloring: &Coloring) -> Catalog {
    let constraint = Constraint::new(guess, coloring);
    let mut survivors = Vec::new();
    for_each_survivor(catalog, &constraint, |candidate| {
        survivors.push(candidate.clone());
    });
    Catalog::from_unique(survivors)
}

/// Size of [`filter`]'s result without building it
#[must_use]
pub fn count_consistent(catalog: &Catalog, guess: &Word, coloring: &Coloring) -> usize {
    let constraint = Constraint::new(guess, coloring);
    let mut count = 0;
    for_each_survivor(catalog, &constraint, |_| count += 1);
    count
}
