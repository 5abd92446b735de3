//! Display functions for command results

use super::formatters::{match_line, numbered_word, plural};
use crate::commands::{SearchError, SearchResult};
use crate::dictionary::DictionaryOrigin;
use colored::Colorize;

/// Print the program banner
pub fn print_banner() {
    println!(
        "{} {}",
        "SpellingBeeSolver".bright_yellow().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).bright_black()
    );
}

/// Report which dictionary is in use
pub fn print_dictionary_origin(origin: &DictionaryOrigin) {
    match origin {
        DictionaryOrigin::BuiltIn => {
            println!("Using default internal dictionary");
        }
        DictionaryOrigin::Fallback { path } => {
            println!(
                "{}",
                format!("Unable to load dictionary from file {path}").yellow()
            );
            println!("Using default internal dictionary");
        }
        DictionaryOrigin::File { path } => {
            println!("Opened dictionary file {}", path.bright_white());
        }
    }
    println!();
}

/// Print the first words of the dictionary, or a warning if it is unreadable
pub fn print_preview(words: Option<&[String]>) {
    match words {
        Some(words) => {
            for (i, word) in words.iter().enumerate() {
                println!("{}", numbered_word(i, word));
            }
        }
        None => println!("{}", "dictionary in error state".red()),
    }
}

/// Warn that letters past the limit were dropped
pub fn print_truncation_warning(max_letters: usize, kept: &str) {
    println!(
        "{}",
        format!("Parsed {max_letters} letters from command line.  Discarding letters after \"{kept}\"")
            .yellow()
    );
}

/// Announce that letter entry was abandoned
pub fn print_letters_aborted(quit_char: char) {
    println!("Exiting due to '{quit_char}'");
}

/// Print the outcome of a search
pub fn print_search_result(result: &SearchResult) {
    println!(
        "Searching for words that contain all of these and only these letters:    {}\n",
        result.letters.to_string().bright_yellow().bold()
    );

    for (i, word) in result.matches.iter().enumerate() {
        println!("{}", match_line(i + 1, &result.letters, &word.green().to_string()));
    }

    if result.matches.is_empty() {
        println!("{}", "No qualifying words found in the dictionary".yellow());
    } else {
        println!(
            "\nFound {} in {}",
            plural(result.matches.len(), "word").bright_green().bold(),
            plural(result.words_scanned, "dictionary word")
        );
    }
}

/// Print why a search was not completed
pub fn print_search_error(error: &SearchError) {
    match error {
        SearchError::TooFewLetters { found, .. } => {
            println!(
                "{}",
                format!(
                    "Error: Only {} will result in too many matches.",
                    plural(*found, "letter")
                )
                .red()
            );
            println!("       Not performing search");
        }
        other => println!("{}", format!("Error: {other}").red()),
    }
}

/// Print the closing line
pub fn print_completed() {
    println!("\n{}", "SpellingBeeSolver completed".bright_black());
}
