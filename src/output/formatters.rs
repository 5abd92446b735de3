//! Formatting utilities for terminal output

use crate::core::Letters;

/// Width of the right-aligned index in numbered listings
pub const INDEX_WIDTH: usize = 5;

/// Format a numbered dictionary entry, e.g. `"    0: abate"`
#[must_use]
pub fn numbered_word(index: usize, word: &str) -> String {
    format!("{index:>INDEX_WIDTH$}: {word}")
}

/// Format one search hit, e.g. `"    1: "abemr"   found in word   bream"`
#[must_use]
pub fn match_line(number: usize, letters: &Letters, word: &str) -> String {
    format!("{number:>INDEX_WIDTH$}: {letters}   found in word   {word}")
}

/// Pluralize `noun` for `count`
#[must_use]
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
