//! Full games over small catalogs, through the public API only

use wordle_entropy::catalog::Catalog;
use wordle_entropy::core::{Coloring, Word};
use wordle_entropy::game::{
    GameSession, Outcome, ScriptedFeedback, SessionConfig, SimulatedFeedback,
};
use wordle_entropy::solver::{
    EntropyStrategy, ScoringPool, Selection, Strategy, plausible_colorings, score, select_next,
};
use wordle_entropy::wordlists::loader::words_from_slice;
use wordle_entropy::wordlists::sample_catalog;

fn fixture() -> Catalog {
    Catalog::new(words_from_slice(&["crane", "trace", "slate", "place"]))
}

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

#[test]
fn every_fixture_guess_scores_two_bits() {
    let catalog = fixture();
    let colorings = plausible_colorings(&catalog);

    for candidate in &catalog {
        let entropy = score(&catalog, candidate.word(), &colorings);
        assert!((entropy - 2.0).abs() < 1e-9, "{candidate}: {entropy}");
    }
}

#[test]
fn fixture_game_solves_slate_in_two() {
    let strategy = EntropyStrategy::new(ScoringPool::Sequential);
    let mut session = GameSession::new(fixture(), &strategy, SessionConfig::default());

    let first = session.suggest();
    assert_eq!(first.word, word("crane"));
    assert!((first.score - 2.0).abs() < 1e-9);

    let coloring = Coloring::color_for(&first.word, &word("slate"));
    assert_eq!(coloring, "--G-G".parse().unwrap());
    session.submit(&first, coloring).unwrap();

    let texts: Vec<&str> = session.catalog().iter().map(|c| c.text()).collect();
    assert_eq!(texts, ["slate"]);

    let second = session.suggest();
    assert_eq!(second.word, word("slate"));
    session.submit(&second, Coloring::ALL_CORRECT).unwrap();

    assert_eq!(session.outcome(), Outcome::Solved { guesses: 2 });
}

#[test]
fn parallel_and_sequential_selection_agree() {
    let catalog = sample_catalog();
    let sequential = select_next(&catalog, &ScoringPool::Sequential);
    let global = select_next(&catalog, &ScoringPool::Global);
    let dedicated = select_next(&catalog, &ScoringPool::with_threads(3).unwrap());

    assert_eq!(sequential, global);
    assert_eq!(sequential, dedicated);
}

#[test]
fn repeated_games_are_identical() {
    let catalog = sample_catalog();
    let strategy = EntropyStrategy::default();

    let play = |solution: &str| {
        let mut session = GameSession::new(catalog.clone(), &strategy, SessionConfig::default());
        let outcome = session.play(&mut SimulatedFeedback::new(word(solution))).unwrap();
        let guesses: Vec<Word> = session.history().iter().map(|r| r.guess.clone()).collect();
        (outcome, guesses)
    };

    for solution in ["youth", "trace", "level"] {
        let (outcome, guesses) = play(solution);
        assert!(outcome.is_solved(), "{solution} not solved: {guesses:?}");
        assert_eq!(play(solution), (outcome, guesses));
    }
}

#[test]
fn contradictory_feedback_falls_back_to_sentinel() {
    let strategy = EntropyStrategy::new(ScoringPool::Sequential);
    let mut session = GameSession::new(fixture(), &strategy, SessionConfig::default());
    let mut script = ScriptedFeedback::new(vec!["YYYYY".parse().unwrap()]);

    // Ends with Aborted once the script runs dry after the empty catalog
    assert!(session.play(&mut script).is_err());
    assert!(session.catalog().is_empty());
    assert_eq!(strategy.select_guess(session.catalog()), Selection::sentinel());
}
