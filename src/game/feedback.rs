//! Sources of feedback for a played guess

use super::GameError;
use crate::catalog::Catalog;
use crate::core::{Coloring, Word};
use crate::solver::Selection;

/// What a feedback source may want to know about the turn
#[derive(Debug, Clone, Copy)]
pub struct TurnContext<'a> {
    /// 1-based turn number
    pub turn: usize,
    pub max_guesses: usize,
    /// Candidates the guess was chosen from
    pub catalog: &'a Catalog,
}

/// Anything that can color a guess: a hidden solution, a person, a test
pub trait FeedbackSource {
    /// Produce the coloring for `selection`
    ///
    /// # Errors
    /// Returns `GameError` if feedback cannot be obtained.
    fn feedback(
        &mut self,
        selection: &Selection,
        context: &TurnContext<'_>,
    ) -> Result<Coloring, GameError>;
}

/// Colors guesses against a known solution
#[derive(Debug, Clone)]
pub struct SimulatedFeedback {
    solution: Word,
}

impl SimulatedFeedback {
    #[must_use]
    pub const fn new(solution: Word) -> Self {
        Self { solution }
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }
}

impl FeedbackSource for SimulatedFeedback {
    fn feedback(
        &mut self,
        selection: &Selection,
        _context: &TurnContext<'_>,
    ) -> Result<Coloring, GameError> {
        Ok(Coloring::color_for(&selection.word, &self.solution))
    }
}

/// Replays a fixed list of colorings, one per turn
#[derive(Debug, Clone)]
pub struct ScriptedFeedback {
    colorings: std::vec::IntoIter<Coloring>,
}

impl ScriptedFeedback {
    #[must_use]
    pub fn new(colorings: Vec<Coloring>) -> Self {
        Self {
            colorings: colorings.into_iter(),
        }
    }
}

impl FeedbackSource for ScriptedFeedback {
    fn feedback(
        &mut self,
        _selection: &Selection,
        _context: &TurnContext<'_>,
    ) -> Result<Coloring, GameError> {
        self.colorings.next().ok_or(GameError::Aborted)
    }
}
