//! Shannon entropy scoring of a guess against a catalog
//!
//! Each plausible coloring splits off the candidates consistent with it; the
//! guess's score is the entropy of that split under a uniform prior over
//! candidates.

use super::colorings::colorings_for;
use crate::catalog::Catalog;
use crate::core::{Coloring, Word};

/// Metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Largest group of candidates sharing one coloring
    pub max_partition: usize,
}

/// Contribution `-p·log₂(p)` of one outcome with `count` of `total` candidates
///
/// An outcome nobody matches contributes exactly zero (0·log₂0 = 0), as does
/// a certain outcome.
#[inline]
#[must_use]
pub fn information(count: usize, total: usize) -> f64 {
    if count == 0 || count >= total {
        return 0.0;
    }
    let p = count as f64 / total as f64;
    -p * p.log2()
}

/// Candidates consistent with each coloring `guess` could receive
fn partition_sizes<'a>(
    catalog: &'a Catalog,
    guess: &'a Word,
    colorings: &'a [Coloring],
) -> impl Iterator<Item = usize> + 'a {
    colorings_for(guess, colorings).map(move |coloring| catalog.count_consistent(guess, coloring))
}

/// Expected information gain of playing `guess` against `catalog`, in bits
///
/// # Formula
/// H = -Σ P(k) · log₂(P(k)), over every coloring `k` in `colorings` that
/// `guess` can receive, where P(k) is the fraction of candidates that would
/// leave feedback `k`.
///
/// # Properties
/// - Always in `[0, log₂(n)]` for `n` candidates
/// - 0 for an empty or single-candidate catalog
///
/// # Examples
/// ```
/// use wordle_entropy::catalog::Catalog;
/// use wordle_entropy::core::Word;
/// use wordle_entropy::solver::{plausible_colorings, score};
///
/// let catalog: Catalog = ["crane", "trace", "slate", "place"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let colorings = plausible_colorings(&catalog);
///
/// // CRANE leaves a different coloring for every candidate: log2(4) bits
/// let entropy = score(&catalog, &Word::new("crane").unwrap(), &colorings);
/// assert!((entropy - 2.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn score(catalog: &Catalog, guess: &Word, colorings: &[Coloring]) -> f64 {
    let total = catalog.len();
    partition_sizes(catalog, guess, colorings)
        .map(|count| information(count, total))
        .sum()
}

/// Entropy plus partition statistics for one guess
#[must_use]
pub fn metrics(catalog: &Catalog, guess: &Word, colorings: &[Coloring]) -> GuessMetrics {
    let total = catalog.len();
    if total == 0 {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let mut entropy = 0.0;
    let mut expected_remaining = 0.0;
    let mut max_partition = 0;

    for count in partition_sizes(catalog, guess, colorings) {
        entropy += information(count, total);
        expected_remaining += (count * count) as f64 / total as f64;
        max_partition = max_partition.max(count);
    }

    GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::plausible_colorings;
    use crate::wordlists::loader::words_from_slice;
    use proptest::prelude::*;
    use rustc_hash::FxHashMap;

    fn catalog(words: &[&str]) -> Catalog {
        Catalog::new(words_from_slice(words))
    }

    fn entropy_of(catalog: &Catalog, guess: &str) -> f64 {
        let colorings = plausible_colorings(catalog);
        score(catalog, &Word::new(guess).unwrap(), &colorings)
    }

    /// Reference entropy from grouping candidates by their true feedback
    fn grouped_entropy(catalog: &Catalog, guess: &Word) -> f64 {
        let mut groups: FxHashMap<Coloring, usize> = FxHashMap::default();
        for candidate in catalog {
            *groups
                .entry(Coloring::color_for(guess, candidate.word()))
                .or_insert(0) += 1;
        }
        groups
            .values()
            .map(|&count| information(count, catalog.len()))
            .sum()
    }

    #[test]
    fn information_zero_conventions() {
        assert!(information(0, 10).abs() < f64::EPSILON);
        assert!(information(10, 10).abs() < f64::EPSILON);
        assert!((information(1, 2) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn perfect_split_of_four_is_two_bits() {
        let fixture = catalog(&["crane", "trace", "slate", "place"]);
        for guess in ["crane", "trace", "slate", "place"] {
            assert!((entropy_of(&fixture, guess) - 2.0).abs() < 1e-9, "{guess}");
        }
    }

    #[test]
    fn single_candidate_scores_zero() {
        let fixture = catalog(&["slate"]);
        assert!(entropy_of(&fixture, "slate").abs() < f64::EPSILON);
    }

    #[test]
    fn empty_catalog_scores_zero() {
        let fixture = catalog(&[]);
        assert!(entropy_of(&fixture, "slate").abs() < f64::EPSILON);
    }

    #[test]
    fn diverse_guess_beats_repetitive_guess() {
        let fixture = catalog(&["slate", "irate", "crate", "grate", "aaaaa"]);
        assert!(entropy_of(&fixture, "crate") > entropy_of(&fixture, "aaaaa"));
    }

    #[test]
    fn metrics_agree_with_score() {
        let fixture = catalog(&["crane", "trace", "slate", "place", "grace", "brace"]);
        let colorings = plausible_colorings(&fixture);
        let guess = Word::new("grace").unwrap();

        let m = metrics(&fixture, &guess, &colorings);
        assert!((m.entropy - score(&fixture, &guess, &colorings)).abs() < 1e-12);
        assert!(m.max_partition >= 1);
        assert!(m.expected_remaining >= 1.0);
        assert!(m.expected_remaining <= fixture.len() as f64);
    }

    fn small_alphabet_word() -> impl Strategy<Value = Word> {
        proptest::collection::vec(prop::sample::select(vec!['a', 'e', 'l', 'r', 's', 't']), 5)
            .prop_map(|letters| Word::new(&letters.into_iter().collect::<String>()).unwrap())
    }

    proptest! {
        #[test]
        fn entropy_within_bounds(
            words in proptest::collection::vec(small_alphabet_word(), 1..30),
            pick in any::<prop::sample::Index>(),
        ) {
            let catalog = Catalog::new(words);
            let guess = pick.get(catalog.candidates()).word();
            let entropy = score(&catalog, guess, &plausible_colorings(&catalog));

            prop_assert!(entropy >= 0.0);
            prop_assert!(entropy <= (catalog.len() as f64).log2() + 1e-9);
        }

        #[test]
        fn entropy_matches_grouping_by_feedback(
            words in proptest::collection::vec(small_alphabet_word(), 1..30),
            pick in any::<prop::sample::Index>(),
        ) {
            let catalog = Catalog::new(words);
            let guess = pick.get(catalog.candidates()).word();
            let entropy = score(&catalog, guess, &plausible_colorings(&catalog));

            prop_assert!((entropy - grouped_entropy(&catalog, guess)).abs() < 1e-9);
        }
    }
}
