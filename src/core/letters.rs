//! Spelling Bee letter set
//!
//! A `Letters` value holds the deduplicated, case-insensitive set of characters
//! a qualifying word must be built from.

use std::fmt;

/// Fewest distinct letters a search is allowed to run with
pub const MIN_LETTERS: usize = 5;

/// Most letters accepted from the command line or the console
pub const MAX_LETTERS: usize = 7;

/// Remove case-insensitive duplicates from a letter sequence in place
///
/// The first occurrence of each letter keeps its position and its original
/// case; every later occurrence is dropped.
///
/// # Examples
/// ```
/// use spelling_bee_solver::core::remove_duplicate_letters;
///
/// let mut letters: Vec<char> = "aAbBa".chars().collect();
/// remove_duplicate_letters(&mut letters);
/// assert_eq!(letters, vec!['a', 'b']);
/// ```
pub fn remove_duplicate_letters(letters: &mut Vec<char>) {
    let mut kept: Vec<char> = Vec::with_capacity(letters.len());
    letters.retain(|&c| {
        if kept.iter().any(|&k| same_letter(k, c)) {
            false
        } else {
            kept.push(c);
            true
        }
    });
}

#[inline]
fn same_letter(a: char, b: char) -> bool {
    a.to_lowercase().eq(b.to_lowercase())
}

/// A deduplicated set of letters in entry order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Letters {
    chars: Vec<char>,
}

/// Outcome of parsing letters from a command-line token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLetters {
    pub letters: Letters,
    /// Set when alphabetic characters past the limit were discarded
    pub truncated: bool,
}

impl Letters {
    /// Build a letter set from arbitrary characters, removing duplicates
    #[must_use]
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut chars: Vec<char> = chars.into_iter().collect();
        remove_duplicate_letters(&mut chars);
        Self { chars }
    }

    /// Parse letters from a command-line token such as `"abcdefg"`
    ///
    /// Quote characters and anything non-alphabetic are dropped. At most
    /// `max_letters` alphabetic characters are taken before deduplication;
    /// anything after that is discarded and reported through
    /// [`ParsedLetters::truncated`].
    ///
    /// # Examples
    /// ```
    /// use spelling_bee_solver::core::Letters;
    ///
    /// let parsed = Letters::from_token("\"ab-c1de\"", 7);
    /// assert_eq!(parsed.letters.as_string(), "abcde");
    /// assert!(!parsed.truncated);
    /// ```
    #[must_use]
    pub fn from_token(token: &str, max_letters: usize) -> ParsedLetters {
        let mut alphabetic = token.chars().filter(char::is_ascii_alphabetic);
        let taken: Vec<char> = alphabetic.by_ref().take(max_letters).collect();
        let truncated = alphabetic.next().is_some();

        ParsedLetters {
            letters: Self::new(taken),
            truncated,
        }
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The letters in entry order
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// True when the set has enough letters to be worth searching for
    #[inline]
    #[must_use]
    pub fn meets_minimum(&self, min_letters: usize) -> bool {
        self.chars.len() >= min_letters
    }

    /// The letters joined into a string, original case preserved
    #[must_use]
    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

impl fmt::Display for Letters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_string())
    }
}
