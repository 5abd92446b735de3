//! Word search command
//!
//! Scans a dictionary for every word built from all and only the given letters.

use crate::core::{Letters, MAX_LETTERS, MIN_LETTERS, qualifies};
use crate::dictionary::{DEFAULT_LINE_SIZE, WordSource};
use thiserror::Error;

/// Number of dictionary words shown before searching
pub const DEFAULT_PREVIEW_COUNT: usize = 4;

/// Configuration for a search run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub min_letters: usize,
    pub max_letters: usize,
    /// Longest dictionary line kept, in characters
    pub line_size: usize,
    pub preview_count: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_letters: MIN_LETTERS,
            max_letters: MAX_LETTERS,
            line_size: DEFAULT_LINE_SIZE,
            preview_count: DEFAULT_PREVIEW_COUNT,
        }
    }
}

/// Result of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub letters: Letters,
    /// Qualifying words in dictionary order
    pub matches: Vec<String>,
    pub words_scanned: usize,
}

/// Reasons a search is not performed or cannot complete
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("only {found} letters will result in too many matches (need at least {min})")]
    TooFewLetters { found: usize, min: usize },

    #[error("dictionary could not be opened")]
    Unavailable,

    #[error("dictionary reported an error after {words_scanned} words")]
    Source { words_scanned: usize },
}

/// Search `source` for words using all and only `letters`
///
/// The source is opened (or rewound) first, so any read position left by an
/// earlier pass is ignored.
///
/// # Errors
///
/// Returns an error if:
/// - `letters` has fewer than `config.min_letters` letters
/// - The source cannot be opened
/// - The source reports an error part way through
///
/// # Examples
/// ```
/// use spelling_bee_solver::commands::{SearchConfig, run_search};
/// use spelling_bee_solver::core::Letters;
/// use spelling_bee_solver::dictionary::MemorySource;
///
/// let backing = ["ember", "bemoan", "bream"];
/// let mut source = MemorySource::new(&backing);
/// let letters = Letters::new("abemr".chars());
///
/// let result = run_search(&mut source, &letters, &SearchConfig::default()).unwrap();
/// assert_eq!(result.matches, vec!["bream"]);
/// ```
pub fn run_search<W: WordSource + ?Sized>(
    source: &mut W,
    letters: &Letters,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    if !letters.meets_minimum(config.min_letters) {
        return Err(SearchError::TooFewLetters {
            found: letters.len(),
            min: config.min_letters,
        });
    }

    if !source.open() {
        return Err(SearchError::Unavailable);
    }

    let mut matches = Vec::new();
    let mut words_scanned = 0;
    while source.has_next() {
        let word = source.next_word();
        words_scanned += 1;
        if qualifies(letters.chars(), &word) {
            log::debug!("{word} qualifies for {letters}");
            matches.push(word);
        }
    }

    if source.is_error() {
        return Err(SearchError::Source { words_scanned });
    }

    log::info!(
        "scanned {words_scanned} words, {} qualify for {letters}",
        matches.len()
    );

    Ok(SearchResult {
        letters: letters.clone(),
        matches,
        words_scanned,
    })
}
