//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::entropy::score;
use super::pool::ScoringPool;
use super::{Selection, plausible_colorings, select_next};
use crate::catalog::Catalog;
use log::warn;

/// A strategy for choosing the next guess from the remaining candidates
pub trait Strategy: Send + Sync {
    /// Select the next guess
    ///
    /// Must not fail: an empty catalog yields [`Selection::sentinel`].
    fn select_guess(&self, catalog: &Catalog) -> Selection;

    /// Short name for display
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Entropy maximization (default)
    Entropy(EntropyStrategy),
    /// First remaining candidate
    Naive(NaiveStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&self, catalog: &Catalog) -> Selection {
        match self {
            Self::Entropy(s) => s.select_guess(catalog),
            Self::Naive(s) => s.select_guess(catalog),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Entropy(s) => s.name(),
            Self::Naive(s) => s.name(),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "entropy", "naive". Defaults to entropy if the name
    /// is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, pool: ScoringPool) -> Self {
        match name {
            "naive" | "first" => Self::Naive(NaiveStrategy),
            "entropy" => Self::Entropy(EntropyStrategy::new(pool)),
            other => {
                warn!("unknown strategy '{other}', using entropy");
                Self::Entropy(EntropyStrategy::new(pool))
            }
        }
    }
}

/// Entropy maximization strategy
///
/// Always selects the remaining candidate with the highest Shannon entropy.
#[derive(Debug, Clone, Default)]
pub struct EntropyStrategy {
    pool: ScoringPool,
}

impl EntropyStrategy {
    #[must_use]
    pub const fn new(pool: ScoringPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub const fn pool(&self) -> &ScoringPool {
        &self.pool
    }
}

impl Strategy for EntropyStrategy {
    fn select_guess(&self, catalog: &Catalog) -> Selection {
        select_next(catalog, &self.pool)
    }

    fn name(&self) -> &'static str {
        "entropy"
    }
}

/// Naive strategy
///
/// Guesses the first remaining candidate without optimizing. The reported
/// score is still that guess's entropy, for comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveStrategy;

impl Strategy for NaiveStrategy {
    fn select_guess(&self, catalog: &Catalog) -> Selection {
        catalog
            .candidates()
            .first()
            .map_or_else(Selection::sentinel, |candidate| Selection {
                word: candidate.word().clone(),
                score: score(catalog, candidate.word(), &plausible_colorings(catalog)),
            })
    }

    fn name(&self) -> &'static str {
        "naive"
    }
}
