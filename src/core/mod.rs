//! Core domain types for Spelling Bee
//!
//! This module contains the letter set and the matching predicates. Everything
//! here is pure and independent of where the words come from.

mod letters;
mod matcher;

pub use letters::{Letters, MAX_LETTERS, MIN_LETTERS, ParsedLetters, remove_duplicate_letters};
pub use matcher::{contains_all_letters, qualifies, uses_only_letters};
