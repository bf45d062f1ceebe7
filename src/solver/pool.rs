//! Worker pool for scoring independent guesses
//!
//! Scoring one guess reads only the turn's catalog and coloring list, so
//! every guess can be scored on its own thread and the results reduced to a
//! maximum afterwards.

use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("failed to build scoring thread pool: {0}")]
    Build(#[from] rayon::ThreadPoolBuildError),
}

/// Where per-guess scoring runs
#[derive(Debug, Clone, Default)]
pub enum ScoringPool {
    /// On the calling thread, in order
    Sequential,
    /// On rayon's global pool
    #[default]
    Global,
    /// On a dedicated pool of fixed size
    Dedicated(Arc<rayon::ThreadPool>),
}

impl ScoringPool {
    /// Build a pool with `threads` workers; `0` means rayon's global pool
    ///
    /// # Errors
    /// Returns `PoolError` if the thread pool cannot be created.
    pub fn with_threads(threads: usize) -> Result<Self, PoolError> {
        if threads == 0 {
            return Ok(Self::Global);
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("scorer-{i}"))
            .build()?;

        Ok(Self::Dedicated(Arc::new(pool)))
    }

    /// Score every item and return the index and score of the best one
    ///
    /// Ties go to the lowest index, so the answer is the same whichever way
    /// the work is scheduled. Returns `None` for an empty slice.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::solver::ScoringPool;
    ///
    /// let values = [1.0, 3.0, 2.0, 3.0];
    /// let best = ScoringPool::Global.argmax(&values, |&v| v);
    /// assert_eq!(best, Some((1, 3.0)));
    /// ```
    pub fn argmax<T, F>(&self, items: &[T], score: F) -> Option<(usize, f64)>
    where
        T: Sync,
        F: Fn(&T) -> f64 + Sync + Send,
    {
        let parallel = || {
            items
                .par_iter()
                .enumerate()
                .map(|(idx, item)| (idx, score(item)))
                .reduce_with(prefer_higher)
        };

        match self {
            Self::Sequential => items
                .iter()
                .enumerate()
                .map(|(idx, item)| (idx, score(item)))
                .reduce(prefer_higher),
            Self::Global => parallel(),
            Self::Dedicated(pool) => pool.install(parallel),
        }
    }

    /// Score every item, keeping input order
    pub fn score_all<T, F>(&self, items: &[T], score: F) -> Vec<f64>
    where
        T: Sync,
        F: Fn(&T) -> f64 + Sync + Send,
    {
        let parallel = || -> Vec<f64> { items.par_iter().map(&score).collect() };

        match self {
            Self::Sequential => items.iter().map(&score).collect(),
            Self::Global => parallel(),
            Self::Dedicated(pool) => pool.install(parallel),
        }
    }
}

/// Reduction step: higher score wins, equal scores keep the earlier index
fn prefer_higher(a: (usize, f64), b: (usize, f64)) -> (usize, f64) {
    match b.1.total_cmp(&a.1) {
        Ordering::Greater => b,
        Ordering::Equal if b.0 < a.0 => b,
        _ => a,
    }
}
