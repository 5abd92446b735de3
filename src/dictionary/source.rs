//! Sequential word source contract
//!
//! Defines the `WordSource` trait shared by every dictionary backing.

/// A sequential, restartable enumerator over a word collection
///
/// Failures never panic or return `Err`; they are signalled through the
/// boolean results and [`WordSource::is_error`]. Callers are expected to check
/// [`WordSource::has_next`] before every [`WordSource::next_word`].
pub trait WordSource {
    /// Acquire the backing resource and position at the first word
    ///
    /// If the source is already open and error-free this is the same as
    /// [`WordSource::reset_to_start`]. Returns `false` if there is no backing
    /// resource or the source is in an error state.
    fn open(&mut self) -> bool;

    /// Release the backing resource and return to the not-open state
    ///
    /// Always succeeds, even if nothing was open.
    fn close(&mut self) -> bool;

    /// Reposition at the first word without releasing the resource
    ///
    /// Returns `false` if the source is not open.
    fn reset_to_start(&mut self) -> bool;

    /// True iff the source is open, error-free and has another word
    fn has_next(&self) -> bool;

    /// Return the next word and advance
    ///
    /// Returns an empty string if the source is not open, is in error, or is
    /// exhausted. Variants with a past-end state enter it on an exhausted read.
    fn next_word(&mut self) -> String;

    /// True once an access has failed
    fn is_error(&self) -> bool;

    /// True iff the resource is held and the source is error-free
    fn is_open(&self) -> bool;

    /// Iterate the remaining words, stopping cleanly at the end
    ///
    /// # Examples
    /// ```
    /// use spelling_bee_solver::dictionary::{MemorySource, WordSource};
    ///
    /// let backing = ["bee", "bead"];
    /// let mut source = MemorySource::new(&backing);
    /// assert!(source.open());
    /// let words: Vec<String> = source.words().collect();
    /// assert_eq!(words, vec!["bee", "bead"]);
    /// assert!(!source.is_error());
    /// ```
    fn words(&mut self) -> Words<'_, Self>
    where
        Self: Sized,
    {
        Words::new(self)
    }
}

/// Iterator over the remaining words of a [`WordSource`]
///
/// Only calls `next_word` while `has_next` holds, so it never drives a source
/// into its past-end state.
pub struct Words<'a, S: WordSource + ?Sized> {
    source: &'a mut S,
}

impl<'a, S: WordSource + ?Sized> Words<'a, S> {
    pub fn new(source: &'a mut S) -> Self {
        Self { source }
    }
}

impl<S: WordSource + ?Sized> Iterator for Words<'_, S> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.source.has_next() {
            Some(self.source.next_word())
        } else {
            None
        }
    }
}
