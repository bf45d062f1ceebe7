//! Game session: one catalog, one guess log, turn by turn

use super::GameError;
use super::feedback::{FeedbackSource, TurnContext};
use crate::catalog::Catalog;
use crate::core::{Coloring, Word};
use crate::solver::{Selection, Strategy};
use log::{debug, info};

/// Default number of guesses allowed
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Library-level session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_guesses: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

/// One played guess and what it did to the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct GuessRecord {
    pub guess: Word,
    pub coloring: Coloring,
    /// Entropy of the guess against the catalog it was chosen from
    pub score: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of submitting one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Solved,
    Continue,
    OutOfGuesses,
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved { guesses: usize },
    Failed { guesses: usize },
}

impl Outcome {
    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    #[must_use]
    pub const fn guesses(self) -> usize {
        match self {
            Self::Solved { guesses } | Self::Failed { guesses } => guesses,
        }
    }
}

/// A single Wordle game driven by a strategy
///
/// The catalog is replaced after every turn, never edited in place; scoring
/// during a turn only ever sees a stable catalog.
pub struct GameSession<'a, S: Strategy + ?Sized> {
    catalog: Catalog,
    history: Vec<GuessRecord>,
    strategy: &'a S,
    config: SessionConfig,
}

impl<'a, S: Strategy + ?Sized> GameSession<'a, S> {
    /// Start a game over `catalog`
    pub fn new(catalog: Catalog, strategy: &'a S, config: SessionConfig) -> Self {
        Self {
            catalog,
            history: Vec::with_capacity(config.max_guesses),
            strategy,
            config,
        }
    }

    /// Candidates still consistent with every recorded guess
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Guesses played so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history.last().is_some_and(|r| r.coloring.is_solved())
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_solved() || self.history.len() >= self.config.max_guesses
    }

    /// The strategy's pick for the current catalog
    #[must_use]
    pub fn suggest(&self) -> Selection {
        self.strategy.select_guess(&self.catalog)
    }

    /// Record the feedback for a played guess and advance the game
    ///
    /// Unless the coloring is all Correct, the catalog is replaced by its
    /// filtered successor.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the game has already ended.
    pub fn submit(
        &mut self,
        selection: &Selection,
        coloring: Coloring,
    ) -> Result<TurnOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let candidates_before = self.catalog.len();
        let solved = coloring.is_solved();
        if !solved {
            self.catalog = self.catalog.filter(&selection.word, &coloring);
        }
        let candidates_after = if solved { 1 } else { self.catalog.len() };

        debug!(
            "turn {}: {} {} ({:.3} bits) {} -> {} candidates",
            self.history.len() + 1,
            selection.word,
            coloring,
            selection.score,
            candidates_before,
            candidates_after
        );

        self.history.push(GuessRecord {
            guess: selection.word.clone(),
            coloring,
            score: selection.score,
            candidates_before,
            candidates_after,
        });

        Ok(if solved {
            TurnOutcome::Solved
        } else if self.history.len() >= self.config.max_guesses {
            TurnOutcome::OutOfGuesses
        } else {
            TurnOutcome::Continue
        })
    }

    /// Current result: solved, or failed so far
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        let guesses = self.history.len();
        if self.is_solved() {
            Outcome::Solved { guesses }
        } else {
            Outcome::Failed { guesses }
        }
    }

    /// Play until solved or out of guesses
    ///
    /// # Errors
    /// Propagates any error from the feedback source.
    pub fn play<F: FeedbackSource + ?Sized>(
        &mut self,
        source: &mut F,
    ) -> Result<Outcome, GameError> {
        while !self.is_over() {
            let selection = self.suggest();
            let context = TurnContext {
                turn: self.history.len() + 1,
                max_guesses: self.config.max_guesses,
                catalog: &self.catalog,
            };
            let coloring = source.feedback(&selection, &context)?;
            self.submit(&selection, coloring)?;
        }

        let outcome = self.outcome();
        match outcome {
            Outcome::Solved { guesses } => info!("solved in {guesses} guesses"),
            Outcome::Failed { guesses } => info!("failed after {guesses} guesses"),
        }
        Ok(outcome)
    }
}
