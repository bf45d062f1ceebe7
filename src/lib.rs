//! Wordle Entropy
//!
//! A Wordle solver that plays, each turn, the remaining candidate with the
//! highest expected information gain.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_entropy::catalog::Catalog;
//! use wordle_entropy::core::{Coloring, Word};
//! use wordle_entropy::game::{GameSession, Outcome, SessionConfig, SimulatedFeedback};
//! use wordle_entropy::solver::EntropyStrategy;
//!
//! // Feedback for a single guess
//! let guess = Word::new("crane").unwrap();
//! let solution = Word::new("slate").unwrap();
//! assert_eq!(Coloring::color_for(&guess, &solution).to_string(), "⬜⬜🟩⬜🟩");
//!
//! // A whole game
//! let catalog: Catalog = ["crane", "trace", "slate", "place"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let strategy = EntropyStrategy::default();
//! let mut session = GameSession::new(catalog, &strategy, SessionConfig::default());
//! let outcome = session.play(&mut SimulatedFeedback::new(solution)).unwrap();
//! assert_eq!(outcome, Outcome::Solved { guesses: 2 });
//! ```

// Core domain types
pub mod core;

// Candidate set and filtering
pub mod catalog;

// Solving algorithms
pub mod solver;

// Turn-by-turn game driver
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
