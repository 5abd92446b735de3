//! Spelling Bee Solver - CLI
//!
//! Searches a dictionary file, or the built-in word list, for words made from
//! all and only the given letters.

use anyhow::{Context, Result};
use clap::Parser;
use spelling_bee_solver::{
    commands::{
        DEFAULT_PREVIEW_COUNT, QUIT_CHAR, SearchConfig, SearchError, preview_words, read_letters,
        run_search,
    },
    core::{Letters, MAX_LETTERS, MIN_LETTERS},
    dictionary::{DEFAULT_LINE_SIZE, Dictionary},
    output::{
        print_banner, print_completed, print_dictionary_origin, print_letters_aborted,
        print_preview, print_search_error, print_search_result, print_truncation_warning,
    },
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "spelling_bee_solver",
    about = "Finds all words containing all of, and only, the given letters",
    long_about = format!(
        "Finds all words containing all characters and only the characters from a \
         user entered string of at least {MIN_LETTERS} but not more than {MAX_LETTERS} \
         letters by searching a user specified dictionary file. If no dictionary file \
         is specified, an internal default dictionary is used."
    ),
    version,
    author
)]
struct Cli {
    /// Letters to search for, e.g. "abcdefg" (prompted for if omitted)
    #[arg(short, long)]
    letters: Option<String>,

    /// Dictionary file with one word per line (built-in list if omitted)
    #[arg(short = 'f', long = "file", env = "SPELLING_BEE_DICTIONARY")]
    file: Option<PathBuf>,

    /// Longest dictionary line kept, in characters; longer lines are truncated
    #[arg(long, default_value_t = DEFAULT_LINE_SIZE)]
    line_size: usize,

    /// Number of dictionary words shown before searching
    #[arg(long, default_value_t = DEFAULT_PREVIEW_COUNT)]
    preview: usize,

    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = SearchConfig {
        line_size: cli.line_size,
        preview_count: cli.preview,
        ..SearchConfig::default()
    };

    print_banner();

    let (mut dictionary, origin) = Dictionary::select(cli.file.as_deref(), config.line_size);
    print_dictionary_origin(&origin);

    let preview = preview_words(&mut dictionary, config.preview_count);
    print_preview(preview.as_deref());

    let Some(letters) = collect_letters(cli.letters.as_deref(), config.max_letters)? else {
        print_letters_aborted(QUIT_CHAR);
        print_completed();
        return Ok(());
    };

    match run_search(&mut dictionary, &letters, &config) {
        Ok(result) => print_search_result(&result),
        Err(e) => {
            if !matches!(e, SearchError::TooFewLetters { .. }) {
                log::error!("search failed: {e}");
            }
            print_search_error(&e);
        }
    }

    print_completed();
    Ok(())
}

/// Take letters from the `-l` token, or prompt for them on the console
fn collect_letters(token: Option<&str>, max_letters: usize) -> Result<Option<Letters>> {
    if let Some(token) = token {
        let parsed = Letters::from_token(token, max_letters);
        if parsed.truncated {
            let kept: String = token
                .chars()
                .filter(char::is_ascii_alphabetic)
                .take(max_letters)
                .collect();
            print_truncation_warning(max_letters, &kept);
        }
        return Ok(Some(parsed.letters));
    }

    read_letters(io::stdin().lock(), io::stdout(), max_letters)
        .context("failed to read letters from the console")
}
