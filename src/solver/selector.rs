//! Pure entropy-based guess selection
//!
//! Picks the remaining candidate with the highest expected information gain.

use super::colorings::plausible_colorings;
use super::entropy::score;
use super::pool::ScoringPool;
use crate::catalog::Catalog;
use crate::core::Word;
use log::{trace, warn};

/// A chosen guess and its entropy score in bits
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub word: Word,
    pub score: f64,
}

impl Selection {
    /// The fixed guess offered when no candidate remains
    #[must_use]
    pub const fn sentinel() -> Self {
        Self {
            word: Word::SENTINEL,
            score: 0.0,
        }
    }

    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.word == Word::SENTINEL
    }
}

/// Select the candidate that maximizes entropy against `catalog`
///
/// Plausible colorings are enumerated once and shared by every guess; the
/// guesses themselves are scored on `pool`. Equal scores resolve to the
/// candidate that comes first in catalog order. An empty catalog yields
/// [`Selection::sentinel`].
///
/// # Examples
/// ```
/// use wordle_entropy::catalog::Catalog;
/// use wordle_entropy::core::Word;
/// use wordle_entropy::solver::{ScoringPool, select_next};
///
/// let catalog: Catalog = ["aaaaa", "slate", "irate", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let best = select_next(&catalog, &ScoringPool::Global);
/// assert_ne!(best.word.text(), "aaaaa");
/// assert!(best.score > 0.0);
/// ```
#[must_use]
pub fn select_next(catalog: &Catalog, pool: &ScoringPool) -> Selection {
    let colorings = plausible_colorings(catalog);
    let candidates = catalog.candidates();

    let best = pool.argmax(candidates, |candidate| {
        score(catalog, candidate.word(), &colorings)
    });

    let Some((idx, score)) = best else {
        warn!("no candidates remain, falling back to {}", Word::SENTINEL);
        return Selection::sentinel();
    };

    let word = candidates[idx].word().clone();
    trace!(
        "selected {word} at {score:.4} bits from {} candidates over {} colorings",
        candidates.len(),
        colorings.len()
    );
    Selection { word, score }
}

/// Score every candidate and return the `limit` best, best first
///
/// Ordering among equal scores follows catalog order.
#[must_use]
pub fn rank_guesses(catalog: &Catalog, pool: &ScoringPool, limit: usize) -> Vec<Selection> {
    let colorings = plausible_colorings(catalog);
    let candidates = catalog.candidates();
    let scores = pool.score_all(candidates, |candidate| {
        score(catalog, candidate.word(), &colorings)
    });

    let mut ranked: Vec<Selection> = candidates
        .iter()
        .zip(scores)
        .map(|(candidate, score)| Selection {
            word: candidate.word().clone(),
            score,
        })
        .collect();

    // Stable sort keeps catalog order among ties
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(limit);
    ranked
}
