//! Letter matching predicates
//!
//! Both checks fold case on both sides before comparing, so `"Bream"` matches
//! the letters `"ABEMR"` just as `"bream"` matches `"abemr"`.

use rustc_hash::FxHashSet;

fn folded_set(chars: impl IntoIterator<Item = char>) -> FxHashSet<char> {
    chars.into_iter().flat_map(char::to_lowercase).collect()
}

/// True if every letter appears at least once somewhere in `word`
///
/// Order and multiplicity in the word are irrelevant.
///
/// # Examples
/// ```
/// use spelling_bee_solver::core::contains_all_letters;
///
/// assert!(contains_all_letters(&['a', 'b', 'c'], "CABBAGE"));
/// assert!(!contains_all_letters(&['a', 'b', 'z'], "cabbage"));
/// ```
#[must_use]
pub fn contains_all_letters(letters: &[char], word: &str) -> bool {
    let present = folded_set(word.chars());
    letters
        .iter()
        .flat_map(|c| c.to_lowercase())
        .all(|c| present.contains(&c))
}

/// True if `word` contains no character outside `letters`
///
/// # Examples
/// ```
/// use spelling_bee_solver::core::uses_only_letters;
///
/// assert!(uses_only_letters(&['a', 'b', 'e', 'm', 'r'], "Ember"));
/// assert!(!uses_only_letters(&['a', 'b', 'e', 'm', 'r'], "bemoan"));
/// ```
#[must_use]
pub fn uses_only_letters(letters: &[char], word: &str) -> bool {
    let allowed = folded_set(letters.iter().copied());
    word.chars()
        .flat_map(char::to_lowercase)
        .all(|c| allowed.contains(&c))
}

/// A qualifying word uses all of the letters and nothing else
#[inline]
#[must_use]
pub fn qualifies(letters: &[char], word: &str) -> bool {
    contains_all_letters(letters, word) && uses_only_letters(letters, word)
}
