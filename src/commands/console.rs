//! Interactive letter entry
//!
//! Prompts for letters on the console when none were given on the command line.

use crate::core::{Letters, MIN_LETTERS};
use std::io::{self, BufRead, Write};

/// Typing this character anywhere in the line abandons letter entry
pub const QUIT_CHAR: char = '!';

/// Prompt on `output` and read one line of letters from `input`
///
/// Non-alphabetic characters are skipped and at most `max_letters` letters
/// are kept before deduplication. Returns `Ok(None)` if the line contains
/// [`QUIT_CHAR`] or input is at end of file.
///
/// # Errors
///
/// Returns an I/O error if writing the prompt or reading the line fails.
///
/// # Examples
/// ```
/// use spelling_bee_solver::commands::read_letters;
/// use std::io::Cursor;
///
/// let mut output = Vec::new();
/// let letters = read_letters(Cursor::new("a b-e m r\n"), &mut output, 7).unwrap();
/// assert_eq!(letters.unwrap().as_string(), "abemr");
/// ```
pub fn read_letters<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    max_letters: usize,
) -> io::Result<Option<Letters>> {
    write!(
        output,
        "Enter between {MIN_LETTERS} and {max_letters} letters, then press return (enter {QUIT_CHAR} to quit): "
    )?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        log::debug!("end of input while waiting for letters");
        return Ok(None);
    }

    if line.contains(QUIT_CHAR) {
        return Ok(None);
    }

    let letters = line
        .chars()
        .filter(char::is_ascii_alphabetic)
        .take(max_letters);
    Ok(Some(Letters::new(letters)))
}
