//! File-backed word source
//!
//! Reads a plain text dictionary lazily, one word per line. The file is opened
//! when the source is constructed and closed when it is dropped or
//! [`WordSource::close`] is called.

use super::WordSource;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Default maximum number of characters kept from a dictionary line
pub const DEFAULT_LINE_SIZE: usize = 64;

/// Lifecycle state of a [`FileSource`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileSourceState {
    /// Constructed without a path; can never be opened
    FilenameNotSpecified,
    FileNotOpen,
    FileOpen,
    FileOpenError,
    FileReadError,
    ReadPastEnd,
}

impl FileSourceState {
    /// Display name of the state
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FilenameNotSpecified => "FILENAME_NOT_SPECIFIED",
            Self::FileNotOpen => "FILE_NOT_OPEN",
            Self::FileOpen => "FILE_OPEN",
            Self::FileOpenError => "FILE_OPEN_ERROR",
            Self::FileReadError => "FILE_READ_ERROR",
            Self::ReadPastEnd => "READ_PAST_END",
        }
    }

    /// True for the states that report [`WordSource::is_error`]
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(
            self,
            Self::FileOpenError | Self::FileReadError | Self::ReadPastEnd
        )
    }
}

impl fmt::Display for FileSourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A [`WordSource`] over a line-oriented text file
///
/// Owns its file handle exclusively, so it is deliberately not `Clone`. To
/// move the handle out while leaving a neutral, not-open source behind, use
/// [`std::mem::take`].
///
/// Errors are only observable after an access attempt: a source that has
/// never tried to open its file reports no error. Construction counts as an
/// attempt, so a bad path shows up in [`WordSource::is_error`] right away.
#[derive(Debug)]
pub struct FileSource {
    path: Option<PathBuf>,
    reader: Option<BufReader<File>>,
    state: FileSourceState,
    open_attempted: bool,
    line_size: usize,
    // One line of lookahead so `has_next` can answer without reading
    pending: Option<String>,
}

impl Default for FileSource {
    /// A source with no path, in the not-open state
    fn default() -> Self {
        Self {
            path: None,
            reader: None,
            state: FileSourceState::FilenameNotSpecified,
            open_attempted: false,
            line_size: DEFAULT_LINE_SIZE,
            pending: None,
        }
    }
}

impl FileSource {
    /// Create a source for `path` and immediately try to open it
    ///
    /// Never fails; check [`WordSource::is_error`] to see whether the file
    /// could be opened.
    ///
    /// # Examples
    /// ```no_run
    /// use spelling_bee_solver::dictionary::{FileSource, WordSource};
    ///
    /// let mut source = FileSource::new("words.txt");
    /// if !source.is_error() {
    ///     while source.has_next() {
    ///         println!("{}", source.next_word());
    ///     }
    /// }
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_line_size(path, DEFAULT_LINE_SIZE)
    }

    /// Like [`FileSource::new`], keeping at most `line_size` characters per line
    ///
    /// A `line_size` of zero is treated as one.
    pub fn with_line_size(path: impl Into<PathBuf>, line_size: usize) -> Self {
        let mut source = Self {
            path: Some(path.into()),
            state: FileSourceState::FileNotOpen,
            line_size: line_size.max(1),
            ..Self::default()
        };
        source.open_file();
        source
    }

    /// Path this source reads from, if one was given
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub const fn state(&self) -> FileSourceState {
        self.state
    }

    #[must_use]
    pub const fn line_size(&self) -> usize {
        self.line_size
    }

    fn open_file(&mut self) -> bool {
        let Some(path) = self.path.as_deref() else {
            return false;
        };

        self.reader = None;
        self.pending = None;
        self.open_attempted = true;

        match File::open(path) {
            Ok(file) => {
                log::debug!("opened dictionary file {}", path.display());
                self.reader = Some(BufReader::new(file));
                self.state = FileSourceState::FileOpen;
                self.advance();
            }
            Err(e) => {
                log::debug!("failed to open dictionary file {}: {e}", path.display());
                self.state = FileSourceState::FileOpenError;
            }
        }

        !self.is_error()
    }

    /// Read the next line into the lookahead slot
    fn advance(&mut self) {
        let Some(reader) = self.reader.as_mut() else {
            self.pending = None;
            return;
        };

        match read_line(reader, self.line_size) {
            Ok(line) => self.pending = line,
            Err(e) => {
                log::warn!("read error in dictionary file: {e}");
                self.pending = None;
                self.state = FileSourceState::FileReadError;
            }
        }
    }
}

/// Read one line, without its terminator, truncated to `line_size` characters
///
/// At most `4 * line_size` bytes of a line are buffered; the rest of an
/// overlong line is skipped. Returns `Ok(None)` at end of file. Bytes that are
/// not valid UTF-8 are replaced rather than treated as a read error.
fn read_line<R: BufRead>(reader: &mut R, line_size: usize) -> io::Result<Option<String>> {
    // A UTF-8 character is at most four bytes
    let cap = line_size.saturating_mul(4);
    let mut buf = Vec::new();
    let read = (&mut *reader)
        .take(u64::try_from(cap).unwrap_or(u64::MAX))
        .read_until(b'\n', &mut buf)?;
    if read == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    } else if read >= cap {
        skip_rest_of_line(reader)?;
    }

    let line = String::from_utf8_lossy(&buf);
    match line.char_indices().nth(line_size) {
        Some((cut, _)) => {
            log::debug!("truncating dictionary line to {line_size} characters: {line}");
            Ok(Some(line[..cut].to_string()))
        }
        None => Ok(Some(line.into_owned())),
    }
}

/// Discard input up to and including the next newline
fn skip_rest_of_line<R: BufRead>(reader: &mut R) -> io::Result<()> {
    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            return Ok(());
        }
        if let Some(end) = available.iter().position(|&b| b == b'\n') {
            reader.consume(end + 1);
            return Ok(());
        }
        let skipped = available.len();
        reader.consume(skipped);
    }
}

impl WordSource for FileSource {
    fn open(&mut self) -> bool {
        if self.is_error() {
            return false;
        }
        if self.is_open() {
            return self.reset_to_start();
        }
        self.open_file()
    }

    fn close(&mut self) -> bool {
        // Dropping the reader closes the file
        self.reader = None;
        self.pending = None;
        self.open_attempted = false;
        self.state = if self.path.is_some() {
            FileSourceState::FileNotOpen
        } else {
            FileSourceState::FilenameNotSpecified
        };
        true
    }

    fn reset_to_start(&mut self) -> bool {
        if self.state != FileSourceState::FileOpen {
            return false;
        }
        let Some(reader) = self.reader.as_mut() else {
            return false;
        };

        match reader.seek(SeekFrom::Start(0)) {
            Ok(_) => {
                self.advance();
                self.state == FileSourceState::FileOpen
            }
            Err(e) => {
                log::warn!("failed to rewind dictionary file: {e}");
                self.pending = None;
                self.state = FileSourceState::FileReadError;
                false
            }
        }
    }

    fn has_next(&self) -> bool {
        self.is_open() && self.pending.is_some()
    }

    fn next_word(&mut self) -> String {
        if !self.is_open() {
            return String::new();
        }

        match self.pending.take() {
            Some(word) => {
                self.advance();
                word
            }
            None => {
                log::debug!("read past end of dictionary file");
                self.state = FileSourceState::ReadPastEnd;
                String::new()
            }
        }
    }

    fn is_error(&self) -> bool {
        self.open_attempted && self.state.is_error()
    }

    fn is_open(&self) -> bool {
        self.reader.is_some() && self.state == FileSourceState::FileOpen
    }
}
