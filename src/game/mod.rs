//! Game driver
//!
//! Runs turns of suggest, feedback, filter until the puzzle is solved or the
//! guess budget runs out.

mod feedback;
mod session;

pub use feedback::{FeedbackSource, ScriptedFeedback, SimulatedFeedback, TurnContext};
pub use session::{
    DEFAULT_MAX_GUESSES, GameSession, GuessRecord, Outcome, SessionConfig, TurnOutcome,
};

use crate::core::ColoringError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,
    #[error("invalid feedback: {0}")]
    InvalidFeedback(#[from] ColoringError),
    #[error("failed to read feedback")]
    Io(#[from] std::io::Error),
    #[error("feedback ended before the game did")]
    Aborted,
}
