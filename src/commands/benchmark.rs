//! Benchmark command
//!
//! Plays simulated games against many hidden solutions and summarizes the
//! guess counts.

use crate::catalog::Catalog;
use crate::core::Word;
use crate::game::{GameError, GameSession, SessionConfig, SimulatedFeedback};
use crate::solver::Strategy;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games keyed by guess count
    pub distribution: FxHashMap<usize, usize>,
    /// Solutions the strategy did not find within the budget
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.solved as f64 / self.total_words as f64 * 100.0
    }
}

/// Draw up to `count` distinct solutions from `catalog`
///
/// The same seed always draws the same words; without one the draw is
/// seeded from the OS.
#[must_use]
pub fn pick_targets(catalog: &Catalog, count: usize, seed: Option<u64>) -> Vec<Word> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    catalog
        .candidates()
        .choose_multiple(&mut rng, count)
        .map(|candidate| candidate.word().clone())
        .collect()
}

/// Run one simulated game per target word
///
/// Games use a fresh copy of `catalog` each. A progress bar is drawn on
/// stderr when `show_progress` is set.
///
/// # Errors
///
/// Propagates a `GameError` from any game.
pub fn run_benchmark<S: Strategy + ?Sized>(
    catalog: &Catalog,
    targets: &[Word],
    strategy: &S,
    config: SessionConfig,
    show_progress: bool,
) -> Result<BenchmarkResult, GameError> {
    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();

    for target in targets {
        let mut session = GameSession::new(catalog.clone(), strategy, config);
        let outcome = session.play(&mut SimulatedFeedback::new(target.clone()))?;
        let guesses = outcome.guesses();

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);

        if outcome.is_solved() {
            solved += 1;
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            debug!("failed to solve {target}");
            failures.push(target.clone());
        }

        pb.set_message(format!("{target}: {guesses}"));
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = targets.len();
    let (average_guesses, words_per_second) = if total_words == 0 {
        min_guesses = 0;
        (0.0, 0.0)
    } else {
        (
            total_guesses as f64 / total_words as f64,
            total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
        )
    };

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses,
        min_guesses,
        max_guesses,
        distribution,
        failures,
        duration,
        words_per_second,
    })
}
