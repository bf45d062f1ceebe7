//! Enumeration of feedback colorings a guess could plausibly receive

use crate::catalog::Catalog;
use crate::core::{ALPHABET_LEN, Color, Coloring, WORD_LEN, Word, letter_index};

/// Every coloring worth considering against `catalog`
///
/// A position where all candidates share one letter can only come back
/// Correct for a guess drawn from the catalog, so it contributes a single
/// branch; every other position contributes all three colors. The result is
/// the Cartesian product across the five positions.
///
/// The list depends on the catalog alone and is shared by every guess of a
/// turn; use [`colorings_for`] to drop the ones a given guess cannot
/// produce.
#[must_use]
pub fn plausible_colorings(catalog: &Catalog) -> Vec<Coloring> {
    let mut colorings = vec![[Color::Absent; WORD_LEN]];

    for position in 0..WORD_LEN {
        let options: &[Color] = if catalog.distinct_letters_at(position) == 1 {
            &[Color::Correct]
        } else {
            &Color::ALL
        };

        colorings = colorings
            .iter()
            .flat_map(|prefix| {
                options.iter().map(move |&color| {
                    let mut next = *prefix;
                    next[position] = color;
                    next
                })
            })
            .collect();
    }

    colorings.into_iter().map(Coloring::new).collect()
}

/// Whether real feedback for `guess` could ever look like `coloring`
///
/// Feedback hands yellows to the leftmost unmatched copies of a letter, so
/// an Absent copy can never precede a Misplaced copy of the same letter.
///
/// # Examples
/// ```
/// use wordle_entropy::core::{Coloring, Word};
/// use wordle_entropy::solver::is_valid_coloring;
///
/// let guess = Word::new("speed").unwrap();
/// assert!(is_valid_coloring(&guess, &"--Y--".parse().unwrap()));
/// assert!(!is_valid_coloring(&guess, &"---Y-".parse().unwrap()));
/// ```
#[must_use]
pub fn is_valid_coloring(guess: &Word, coloring: &Coloring) -> bool {
    let mut misplaced = [false; ALPHABET_LEN];

    for position in (0..WORD_LEN).rev() {
        let letter = letter_index(guess.char_at(position));
        match coloring.at(position) {
            Color::Absent if misplaced[letter] => return false,
            Color::Misplaced => misplaced[letter] = true,
            _ => {}
        }
    }

    true
}

/// The colorings from `colorings` that `guess` could actually receive
pub fn colorings_for<'a>(
    guess: &'a Word,
    colorings: &'a [Coloring],
) -> impl Iterator<Item = &'a Coloring> + 'a {
    colorings
        .iter()
        .filter(move |coloring| is_valid_coloring(guess, coloring))
}
