//! Dictionary preview
//!
//! Reads the first few words of a dictionary so the user can confirm the
//! right list was loaded.

use crate::dictionary::WordSource;

/// Return up to `count` words from the start of `source`
///
/// The source is opened (or rewound) before reading and rewound again after,
/// so a following search starts from the first word. Returns `None` if the
/// source cannot be opened.
///
/// # Examples
/// ```
/// use spelling_bee_solver::commands::preview_words;
/// use spelling_bee_solver::dictionary::{MemorySource, WordSource};
///
/// let backing = ["abate", "abeam", "abet"];
/// let mut source = MemorySource::new(&backing);
/// assert_eq!(preview_words(&mut source, 2), Some(vec!["abate".into(), "abeam".into()]));
/// assert_eq!(source.next_word(), "abate");
/// ```
pub fn preview_words<W: WordSource + ?Sized>(source: &mut W, count: usize) -> Option<Vec<String>> {
    if !source.open() || source.is_error() {
        return None;
    }

    let mut words = Vec::with_capacity(count);
    while words.len() < count && source.has_next() {
        words.push(source.next_word());
    }
    source.reset_to_start();

    Some(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::MemorySource;

    #[test]
    fn preview_shorter_than_dictionary() {
        let backing = ["apple", "peach", "leech"];
        let mut source = MemorySource::new(&backing);
        let words = preview_words(&mut source, 2).unwrap();
        assert_eq!(words, vec!["apple", "peach"]);
        assert!(source.has_next());
        assert_eq!(source.next_word(), "apple");
    }

    #[test]
    fn preview_longer_than_dictionary() {
        let backing = ["apple"];
        let mut source = MemorySource::new(&backing);
        let words = preview_words(&mut source, 4).unwrap();
        assert_eq!(words, vec!["apple"]);
        assert!(!source.is_error());
    }

    #[test]
    fn preview_zero_words() {
        let backing = ["apple"];
        let mut source = MemorySource::new(&backing);
        assert_eq!(preview_words(&mut source, 0), Some(vec![]));
    }

    #[test]
    fn preview_unopenable_source() {
        let mut source: MemorySource<'_> = MemorySource::default();
        assert_eq!(preview_words(&mut source, 4), None);
    }
}
