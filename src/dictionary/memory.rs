//! In-memory word source
//!
//! Iterates a borrowed slice of words. The slice is owned by the caller and
//! must outlive the source.

use super::WordSource;

/// A [`WordSource`] over a borrowed, immutable slice of words
///
/// Unlike [`super::FileSource`], a source built without a backing slice
/// reports [`WordSource::is_error`] immediately, before any access attempt.
#[derive(Debug, Clone)]
pub struct MemorySource<'a, S = &'a str> {
    words: Option<&'a [S]>,
    cursor: usize,
    is_open: bool,
}

impl<S> Default for MemorySource<'_, S> {
    /// A source with no backing slice, permanently in error
    fn default() -> Self {
        Self {
            words: None,
            cursor: 0,
            is_open: false,
        }
    }
}

impl<'a, S: AsRef<str>> MemorySource<'a, S> {
    /// Create a source over `words`; call [`WordSource::open`] before reading
    #[must_use]
    pub const fn new(words: &'a [S]) -> Self {
        Self {
            words: Some(words),
            cursor: 0,
            is_open: false,
        }
    }

    /// Number of words in the backing slice (0 if there is none)
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.map_or(0, <[S]>::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: AsRef<str>> WordSource for MemorySource<'_, S> {
    fn open(&mut self) -> bool {
        if self.words.is_none() {
            return false;
        }
        self.cursor = 0;
        self.is_open = true;
        true
    }

    fn close(&mut self) -> bool {
        self.is_open = false;
        self.cursor = 0;
        true
    }

    fn reset_to_start(&mut self) -> bool {
        if !self.is_open {
            return false;
        }
        self.cursor = 0;
        true
    }

    fn has_next(&self) -> bool {
        self.is_open && self.cursor < self.len()
    }

    fn next_word(&mut self) -> String {
        if !self.is_open {
            return String::new();
        }
        match self.words.and_then(|words| words.get(self.cursor)) {
            Some(word) => {
                self.cursor += 1;
                word.as_ref().to_string()
            }
            None => String::new(),
        }
    }

    fn is_error(&self) -> bool {
        self.words.is_none()
    }

    fn is_open(&self) -> bool {
        self.is_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKING: [&str; 3] = ["apple", "peach", "leech"];

    #[test]
    fn not_open_until_opened() {
        let mut source = MemorySource::new(&BACKING);
        assert!(!source.is_open());
        assert!(!source.has_next());
        assert_eq!(source.next_word(), "");
        assert!(!source.is_error());

        assert!(source.open());
        assert!(source.is_open());
        assert!(source.has_next());
    }

    #[test]
    fn reads_all_words_in_order() {
        let mut source = MemorySource::new(&BACKING);
        source.open();

        assert_eq!(source.next_word(), "apple");
        assert_eq!(source.next_word(), "peach");
        assert_eq!(source.next_word(), "leech");
        assert!(!source.has_next());
    }

    #[test]
    fn exhausted_read_returns_empty_without_error() {
        let mut source = MemorySource::new(&BACKING);
        source.open();
        while source.has_next() {
            source.next_word();
        }

        assert_eq!(source.next_word(), "");
        assert!(!source.is_error());
        assert!(source.is_open());
    }

    #[test]
    fn reset_rewinds_to_first_word() {
        let mut source = MemorySource::new(&BACKING);
        source.open();
        source.next_word();
        source.next_word();

        assert!(source.reset_to_start());
        assert_eq!(source.next_word(), "apple");
    }

    #[test]
    fn reset_fails_when_not_open() {
        let mut source = MemorySource::new(&BACKING);
        assert!(!source.reset_to_start());
        assert!(!source.is_error());
    }

    #[test]
    fn open_while_open_rewinds() {
        let mut source = MemorySource::new(&BACKING);
        source.open();
        source.next_word();

        assert!(source.open());
        assert_eq!(source.next_word(), "apple");
    }

    #[test]
    fn close_always_succeeds() {
        let mut source = MemorySource::new(&BACKING);
        assert!(source.close());

        source.open();
        assert!(source.close());
        assert!(!source.is_open());
        assert!(!source.has_next());
        assert_eq!(source.next_word(), "");
    }

    #[test]
    fn missing_backing_is_error_before_any_access() {
        // No deferral here, unlike FileSource
        let source: MemorySource<'_> = MemorySource::default();
        assert!(source.is_error());
    }

    #[test]
    fn missing_backing_open_fails() {
        let mut source: MemorySource<'_> = MemorySource::default();
        assert!(!source.open());
        assert!(source.is_error());
        assert!(!source.is_open());
        assert_eq!(source.next_word(), "");
    }

    #[test]
    fn empty_backing_is_not_an_error() {
        let backing: [&str; 0] = [];
        let mut source = MemorySource::new(&backing);
        assert!(source.open());
        assert!(!source.has_next());
        assert!(!source.is_error());
    }

    #[test]
    fn owned_strings_as_backing() {
        let backing = vec!["Ember".to_string(), "bream".to_string()];
        let mut source = MemorySource::new(&backing);
        source.open();
        let words: Vec<String> = source.words().collect();
        assert_eq!(words, vec!["Ember", "bream"]);
    }
}
