//! Word solving command
//!
//! Plays a full game against a hidden solution and returns the solution path.

use crate::catalog::Catalog;
use crate::core::{Word, WordError};
use crate::game::{GameError, GameSession, GuessRecord, Outcome, SessionConfig, SimulatedFeedback};
use crate::solver::Strategy;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid target word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("'{0}' is not in the word list")]
    UnknownTarget(Word),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    pub session: SessionConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            session: SessionConfig::default(),
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub strategy: &'static str,
    pub outcome: Outcome,
    pub steps: Vec<GuessRecord>,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.outcome.is_solved()
    }
}

/// Solve `config.target` by simulated play over `catalog`
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid word
/// - The target is not in the catalog
pub fn solve_word<S: Strategy + ?Sized>(
    config: &SolveConfig,
    catalog: &Catalog,
    strategy: &S,
) -> Result<SolveResult, SolveError> {
    let target = Word::new(&config.target)?;
    if !catalog.contains(&target) {
        return Err(SolveError::UnknownTarget(target));
    }

    let mut session = GameSession::new(catalog.clone(), strategy, config.session);
    let mut feedback = SimulatedFeedback::new(target.clone());
    let outcome = session.play(&mut feedback)?;

    Ok(SolveResult {
        target,
        strategy: strategy.name(),
        outcome,
        steps: session.history().to_vec(),
    })
}
