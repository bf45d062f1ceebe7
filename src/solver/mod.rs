//! Wordle solving algorithms
//!
//! Coloring enumeration, entropy scoring, parallel guess selection, and the
//! strategies built on them.

mod colorings;
pub mod entropy;
mod pool;
mod selector;
pub mod strategy;

pub use colorings::{colorings_for, is_valid_coloring, plausible_colorings};
pub use entropy::{GuessMetrics, metrics, score};
pub use pool::{PoolError, ScoringPool};
pub use selector::{Selection, rank_guesses, select_next};
pub use strategy::{EntropyStrategy, NaiveStrategy, Strategy, StrategyType};
