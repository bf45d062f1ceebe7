//! Wordle Entropy - CLI
//!
//! Suggests each guess by expected information gain over the remaining
//! candidates.

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;
use wordle_entropy::{
    catalog::Catalog,
    commands::{SolveConfig, analyze_word, pick_targets, run_benchmark, run_simple, solve_word},
    game::{DEFAULT_MAX_GUESSES, SessionConfig},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{ScoringPool, Strategy, StrategyType},
    wordlists::{DEFAULT_WORDS_PATH, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_entropy",
    about = "Wordle solver that picks each guess by expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary of candidate words, one per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDS_PATH)]
    words: PathBuf,

    /// Strategy: entropy (default) or naive
    #[arg(short, long, global = true, default_value = "entropy")]
    strategy: String,

    /// Scoring threads (0 = one per core)
    #[arg(short = 't', long, global = true, default_value_t = 0)]
    threads: usize,

    /// Score guesses on the main thread only
    #[arg(long, global = true)]
    sequential: bool,

    /// Guesses allowed per game (at least 1)
    #[arg(
        short = 'm',
        long,
        global = true,
        default_value_t = DEFAULT_MAX_GUESSES,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    max_guesses: usize,

    /// More log output (-v, -vv, -vvv); `RUST_LOG` overrides
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: you play, the solver suggests (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(long)]
        verbose: bool,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,

        /// How many of the best openers to list
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for picking the words, for repeatable runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let catalog = load_from_file(&cli.words)
        .with_context(|| format!("could not load words from {}", cli.words.display()))?;

    let pool = if cli.sequential {
        ScoringPool::Sequential
    } else {
        ScoringPool::with_threads(cli.threads).context("could not start scoring threads")?
    };
    let strategy = StrategyType::from_name(&cli.strategy, pool.clone());
    let config = SessionConfig {
        max_guesses: cli.max_guesses,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            run_simple(&catalog, &strategy, config).context("interactive game failed")
        }
        Commands::Solve { word, verbose } => {
            run_solve_command(&word, verbose, &catalog, &strategy, config)
        }
        Commands::Analyze { word, top } => run_analyze_command(&word, top, &catalog, &pool),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(count, seed, &catalog, &strategy, config)
        }
    }
}

fn run_solve_command<S: Strategy>(
    word: &str,
    verbose: bool,
    catalog: &Catalog,
    strategy: &S,
    session: SessionConfig,
) -> Result<()> {
    let config = SolveConfig {
        target: word.to_string(),
        session,
    };
    let result = solve_word(&config, catalog, strategy)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(
    word: &str,
    top: usize,
    catalog: &Catalog,
    pool: &ScoringPool,
) -> Result<()> {
    let result = analyze_word(word, catalog, pool, top)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command<S: Strategy>(
    count: usize,
    seed: Option<u64>,
    catalog: &Catalog,
    strategy: &S,
    config: SessionConfig,
) -> Result<()> {
    println!(
        "Running benchmark on {count} random words with the {} strategy...",
        strategy.name()
    );

    let targets = pick_targets(catalog, count, seed);
    let result = run_benchmark(catalog, &targets, strategy, config, true)?;

    print_benchmark_result(&result, config.max_guesses);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("wordle_entropy").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn max_guesses_defaults_to_six() {
        let cli = parse(&["solve", "crane"]).unwrap();
        assert_eq!(cli.max_guesses, DEFAULT_MAX_GUESSES);
    }

    #[test]
    fn max_guesses_accepts_positive_values() {
        let cli = parse(&["--max-guesses", "3", "solve", "crane"]).unwrap();
        assert_eq!(cli.max_guesses, 3);

        let cli = parse(&["solve", "crane", "-m", "1"]).unwrap();
        assert_eq!(cli.max_guesses, 1);
    }

    #[test]
    fn max_guesses_rejects_zero() {
        assert!(parse(&["--max-guesses", "0", "solve", "crane"]).is_err());
        assert!(parse(&["solve", "crane", "-m", "0"]).is_err());
    }
}
