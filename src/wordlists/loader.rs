//! Word list loading utilities
//!
//! Reads newline-delimited dictionaries into a [`Catalog`].

use crate::catalog::Catalog;
use crate::core::Word;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {} contains no valid five-letter words", path.display())]
    Empty { path: PathBuf },
}

/// Load a catalog from a file
///
/// Blank lines are skipped silently, malformed lines with a warning.
/// Repeated words keep their first position.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, and
/// `LoadError::Empty` if it holds no valid word.
///
/// # Examples
/// ```no_run
/// use wordle_entropy::wordlists::loader::load_from_file;
///
/// let catalog = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_words(&content);
    if catalog.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!("loaded {} words from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Parse newline-delimited words into a catalog
///
/// Same line rules as [`load_from_file`]; an empty result is not an error
/// here.
#[must_use]
pub fn parse_words(content: &str) -> Catalog {
    content
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(err) => {
                    warn!("skipping line {}: {trimmed:?} ({err})", line_no + 1);
                    None
                }
            }
        })
        .collect()
}

/// Convert a string slice to words, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_entropy::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wordle_entropy_{name}_{}.txt", std::process::id()))
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl4te", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_words_trims_dedups_and_skips() {
        let catalog = parse_words("  CRANE \n\nslate\nnope\ncrane\nplace\r\n");
        let texts: Vec<&str> = catalog.iter().map(|c| c.text()).collect();

        assert_eq!(texts, ["crane", "slate", "place"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = temp_path("load");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "crane\ntrace\n\nslate").unwrap();
        drop(file);

        let catalog = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains(&Word::new("trace").unwrap()));
    }

    #[test]
    fn load_from_file_without_words_is_empty_error() {
        let path = temp_path("empty");
        fs::write(&path, "\n  \nxyz\n").unwrap();

        let result = load_from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(LoadError::Empty { .. })));
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let result = load_from_file("definitely/not/here/words.txt");
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
