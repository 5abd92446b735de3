//! Command implementations

pub mod console;
pub mod preview;
pub mod search;

pub use console::{QUIT_CHAR, read_letters};
pub use preview::preview_words;
pub use search::{DEFAULT_PREVIEW_COUNT, SearchConfig, SearchError, SearchResult, run_search};
