//! Dictionaries for Spelling Bee solving
//!
//! A dictionary is any [`WordSource`]. Two backings are provided: a borrowed
//! in-memory slice and a lazily read text file. [`Dictionary`] wraps both so
//! the driver can pick one at runtime without dynamic dispatch.

mod embedded;
mod file;
mod memory;
mod source;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
pub use file::{DEFAULT_LINE_SIZE, FileSource, FileSourceState};
pub use memory::MemorySource;
pub use source::{WordSource, Words};

use std::path::Path;

/// Enum wrapper over the dictionary backings
///
/// Allows runtime selection of the backing while maintaining static dispatch.
#[derive(Debug)]
pub enum Dictionary<'a> {
    /// Words held in memory, typically [`DEFAULT_WORDS`]
    Memory(MemorySource<'a>),
    /// Words read line by line from a file
    File(FileSource),
}

impl WordSource for Dictionary<'_> {
    fn open(&mut self) -> bool {
        match self {
            Self::Memory(s) => s.open(),
            Self::File(s) => s.open(),
        }
    }

    fn close(&mut self) -> bool {
        match self {
            Self::Memory(s) => s.close(),
            Self::File(s) => s.close(),
        }
    }

    fn reset_to_start(&mut self) -> bool {
        match self {
            Self::Memory(s) => s.reset_to_start(),
            Self::File(s) => s.reset_to_start(),
        }
    }

    fn has_next(&self) -> bool {
        match self {
            Self::Memory(s) => s.has_next(),
            Self::File(s) => s.has_next(),
        }
    }

    fn next_word(&mut self) -> String {
        match self {
            Self::Memory(s) => s.next_word(),
            Self::File(s) => s.next_word(),
        }
    }

    fn is_error(&self) -> bool {
        match self {
            Self::Memory(s) => s.is_error(),
            Self::File(s) => s.is_error(),
        }
    }

    fn is_open(&self) -> bool {
        match self {
            Self::Memory(s) => s.is_open(),
            Self::File(s) => s.is_open(),
        }
    }
}

/// Where the words of a [`Dictionary`] came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryOrigin {
    /// The built-in list, because no file was requested
    BuiltIn,
    /// The requested file could not be opened; the built-in list is used
    Fallback { path: String },
    /// The requested file
    File { path: String },
}

impl Dictionary<'static> {
    /// The built-in word list
    #[must_use]
    pub const fn built_in() -> Self {
        Self::Memory(MemorySource::new(DEFAULT_WORDS))
    }

    /// Open `path` if given, falling back to the built-in list when it is
    /// missing or cannot be opened
    ///
    /// # Examples
    /// ```
    /// use spelling_bee_solver::dictionary::{Dictionary, DictionaryOrigin, DEFAULT_LINE_SIZE};
    ///
    /// let (_, origin) = Dictionary::select(None, DEFAULT_LINE_SIZE);
    /// assert_eq!(origin, DictionaryOrigin::BuiltIn);
    /// ```
    #[must_use]
    pub fn select(path: Option<&Path>, line_size: usize) -> (Self, DictionaryOrigin) {
        let Some(path) = path else {
            return (Self::built_in(), DictionaryOrigin::BuiltIn);
        };

        let display = path.display().to_string();
        let source = FileSource::with_line_size(path, line_size);
        if source.is_error() {
            log::warn!(
                "dictionary file {display} is unusable ({}), falling back to built-in list",
                source.state()
            );
            (Self::built_in(), DictionaryOrigin::Fallback { path: display })
        } else {
            (Self::File(source), DictionaryOrigin::File { path: display })
        }
    }
}
