//! Spelling Bee Solver
//!
//! Finds every dictionary word that uses only the given letters and uses all of
//! them at least once, following the NYT Spelling Bee rules.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee_solver::commands::{SearchConfig, run_search};
//! use spelling_bee_solver::core::Letters;
//! use spelling_bee_solver::dictionary::Dictionary;
//!
//! let mut dictionary = Dictionary::built_in();
//! let letters = Letters::new("peach".chars());
//!
//! let result = run_search(&mut dictionary, &letters, &SearchConfig::default()).unwrap();
//! assert!(result.matches.contains(&"cheap".to_string()));
//! ```

// Core domain types
pub mod core;

// Word sources
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
