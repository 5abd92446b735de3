//! End-to-end searches over file and memory dictionaries.

use spelling_bee_solver::commands::{SearchConfig, SearchError, preview_words, run_search};
use spelling_bee_solver::core::{Letters, MAX_LETTERS};
use spelling_bee_solver::dictionary::{
    DEFAULT_LINE_SIZE, Dictionary, DictionaryOrigin, FileSource, FileSourceState, MemorySource,
    WordSource,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn dictionary_file(words: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for word in words {
        writeln!(file, "{word}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn search_file(words: &[&str], letters: &str) -> Result<Vec<String>, SearchError> {
    let file = dictionary_file(words);
    let (mut dictionary, origin) = Dictionary::select(Some(file.path()), DEFAULT_LINE_SIZE);
    assert!(matches!(origin, DictionaryOrigin::File { .. }));

    let letters = Letters::from_token(letters, MAX_LETTERS).letters;
    run_search(&mut dictionary, &letters, &SearchConfig::default()).map(|r| r.matches)
}

#[test]
fn subset_words_are_rejected() {
    let matches = search_file(&["apple", "peach", "leech"], "aelpch").unwrap();
    assert!(matches.is_empty());
}

#[test]
fn four_letters_are_refused() {
    let err = search_file(&["bee", "bead"], "abed").unwrap_err();
    assert!(matches!(err, SearchError::TooFewLetters { found: 4, .. }));
}

#[test]
fn five_letter_search_from_file() {
    let matches = search_file(&["ember", "bemoan", "bream"], "\"abemr\"").unwrap();
    assert_eq!(matches, vec!["bream"]);
}

#[test]
fn file_and_memory_sources_agree() {
    let words = ["abate", "Bream", "ember", "tablet", "bramble", "beam", "amble"];
    let letters = Letters::new("ablemr".chars());

    let file = dictionary_file(&words);
    let mut file_source = FileSource::new(file.path());
    let from_file = run_search(&mut file_source, &letters, &SearchConfig::default()).unwrap();

    let mut memory_source = MemorySource::new(&words);
    let from_memory = run_search(&mut memory_source, &letters, &SearchConfig::default()).unwrap();

    assert_eq!(from_file.matches, from_memory.matches);
    assert_eq!(from_file.matches, vec!["bramble"]);
    assert_eq!(from_file.words_scanned, words.len());
}

#[test]
fn preview_then_search_sees_every_word() {
    let file = dictionary_file(&["bream", "ember", "abemr"]);
    let mut source = FileSource::new(file.path());

    let preview = preview_words(&mut source, 2).unwrap();
    assert_eq!(preview, vec!["bream", "ember"]);

    let letters = Letters::new("abemr".chars());
    let result = run_search(&mut source, &letters, &SearchConfig::default()).unwrap();
    assert_eq!(result.matches, vec!["bream", "abemr"]);
    assert_eq!(result.words_scanned, 3);
}

#[test]
fn search_can_repeat_on_same_source() {
    let file = dictionary_file(&["bream", "ember"]);
    let mut source = FileSource::new(file.path());
    let letters = Letters::new("abemr".chars());

    let first = run_search(&mut source, &letters, &SearchConfig::default()).unwrap();
    let second = run_search(&mut source, &letters, &SearchConfig::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn exhausted_file_source_lifecycle() {
    let file = dictionary_file(&["bream"]);
    let mut source = FileSource::new(file.path());
    assert!(!source.is_error());

    let words: Vec<String> = source.words().collect();
    assert_eq!(words, vec!["bream"]);
    assert!(!source.is_error());

    assert_eq!(source.next_word(), "");
    assert!(source.is_error());
    assert_eq!(source.state(), FileSourceState::ReadPastEnd);

    // Past-end is terminal until the source is closed and reopened
    let letters = Letters::new("abemr".chars());
    let err = run_search(&mut source, &letters, &SearchConfig::default()).unwrap_err();
    assert_eq!(err, SearchError::Unavailable);

    assert!(source.close());
    let result = run_search(&mut source, &letters, &SearchConfig::default()).unwrap();
    assert_eq!(result.matches, vec!["bream"]);
}

#[test]
fn unreadable_file_falls_back_to_built_in() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let (mut dictionary, origin) = Dictionary::select(Some(path.as_path()), DEFAULT_LINE_SIZE);
    assert_eq!(
        origin,
        DictionaryOrigin::Fallback {
            path: path.display().to_string()
        }
    );

    let letters = Letters::new("peach".chars());
    let result = run_search(&mut dictionary, &letters, &SearchConfig::default()).unwrap();
    assert_eq!(result.matches, vec!["cheap", "peach"]);
}

#[test]
fn source_error_asymmetry() {
    // A file source that has never been accessed reports no error
    let idle = FileSource::default();
    assert!(!idle.is_error());

    // A memory source without backing reports an error straight away
    let unbacked: MemorySource<'_> = MemorySource::default();
    assert!(unbacked.is_error());
}
