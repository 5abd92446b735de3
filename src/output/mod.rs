//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_completed, print_dictionary_origin, print_letters_aborted, print_preview,
    print_search_error, print_search_result, print_truncation_warning,
};
