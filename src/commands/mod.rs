//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, AnalyzeError, analyze_word};
pub use benchmark::{BenchmarkResult, pick_targets, run_benchmark};
pub use simple::{HumanFeedback, play_interactive, run_simple};
pub use solve::{SolveConfig, SolveError, SolveResult, solve_word};
