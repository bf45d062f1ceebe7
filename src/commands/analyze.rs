//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific word.

use crate::catalog::Catalog;
use crate::core::{Word, WordError};
use crate::solver::{
    GuessMetrics, ScoringPool, Selection, metrics, plausible_colorings, rank_guesses,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("'{0}' is not in the word list")]
    NotInCatalog(Word),
}

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    /// `2^entropy`: the factor the catalog is expected to shrink by
    pub expected_reduction: f64,
    pub total_candidates: usize,
    /// 1-based position among all candidates, best first
    pub rank: usize,
    /// The best openers, best first
    pub top: Vec<Selection>,
}

/// Analyze `word` as an opening guess against the whole catalog
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is not in the catalog
pub fn analyze_word(
    word: &str,
    catalog: &Catalog,
    pool: &ScoringPool,
    top: usize,
) -> Result<AnalysisResult, AnalyzeError> {
    let word = Word::new(word)?;
    if !catalog.contains(&word) {
        return Err(AnalyzeError::NotInCatalog(word));
    }

    let colorings = plausible_colorings(catalog);
    let metrics = metrics(catalog, &word, &colorings);

    let mut ranked = rank_guesses(catalog, pool, catalog.len());
    let rank = ranked
        .iter()
        .position(|selection| selection.word == word)
        .map_or(ranked.len(), |idx| idx + 1);
    ranked.truncate(top);

    Ok(AnalysisResult {
        expected_reduction: metrics.entropy.exp2(),
        total_candidates: catalog.len(),
        word,
        metrics,
        rank,
        top: ranked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::sample_catalog;

    #[test]
    fn analyze_valid_word() {
        let catalog = sample_catalog();
        let result = analyze_word("crane", &catalog, &ScoringPool::Global, 5).unwrap();

        assert_eq!(result.word.text(), "crane");
        assert!(result.metrics.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert_eq!(result.total_candidates, catalog.len());
        assert_eq!(result.top.len(), 5);
        assert!(result.rank >= 1 && result.rank <= catalog.len());
    }

    #[test]
    fn analyze_word_outside_catalog() {
        let catalog = sample_catalog();
        let result = analyze_word("zzzzz", &catalog, &ScoringPool::Sequential, 5);

        assert!(matches!(result, Err(AnalyzeError::NotInCatalog(_))));
    }

    #[test]
    fn entropy_properties() {
        let catalog = sample_catalog();
        let result = analyze_word("slate", &catalog, &ScoringPool::Global, 1).unwrap();

        assert!(result.metrics.entropy <= (catalog.len() as f64).log2());
        assert!(result.metrics.expected_remaining >= 1.0);
        assert!(result.metrics.expected_remaining <= catalog.len() as f64);
        assert!(result.metrics.max_partition >= 1);
        assert!(result.top[0].score >= result.metrics.entropy);
    }

    #[test]
    fn fixture_ranks_first_word_on_tie() {
        let catalog = Catalog::new(words_from_slice(&["crane", "trace", "slate", "place"]));
        let result = analyze_word("place", &catalog, &ScoringPool::Sequential, 2).unwrap();

        assert!((result.metrics.entropy - 2.0).abs() < 1e-9);
        assert_eq!(result.metrics.max_partition, 1);
        assert_eq!(result.rank, 4);
        assert_eq!(result.top[0].word.text(), "crane");
    }
}
