//! User input utilities for the interactive form.

use std::io::{self, BufRead};

use crate::error::CliError;

/// Read one line, trimmed. A zero-byte read means the input is exhausted
/// and is an error, so prompt loops terminate instead of re-prompting
/// forever.
fn read_trimmed_line(reader: &mut dyn BufRead) -> Result<String, CliError> {
    let mut input = String::new();
    let bytes = reader.read_line(&mut input)?;
    if bytes == 0 {
        return Err(CliError::Io("stdin closed".to_string()));
    }
    Ok(input.trim().to_string())
}

/// Prompt the user for a line of input, trimmed.
pub fn prompt_string(prompt: &str) -> Result<String, CliError> {
    println!("{prompt}: ");
    read_trimmed_line(&mut io::stdin().lock())
}

/// Prompt for an index in `0..=max`, re-prompting on invalid input.
pub fn prompt_index(prompt: &str, max: usize) -> Result<usize, CliError> {
    loop {
        let input = prompt_string(&format!("{prompt} (0-{max})"))?;
        match input.parse::<usize>() {
            Ok(value) if value <= max => return Ok(value),
            _ => {
                eprintln!("Please enter a number between 0 and {max}.");
            }
        }
    }
}

/// Prompt for an optional index in `0..=max`; empty input means "unset".
pub fn prompt_optional_index(prompt: &str, max: usize) -> Result<Option<usize>, CliError> {
    loop {
        let input = prompt_string(&format!("{prompt} (0-{max}, empty to clear)"))?;
        if input.is_empty() {
            return Ok(None);
        }
        match input.parse::<usize>() {
            Ok(value) if value <= max => return Ok(Some(value)),
            _ => {
                eprintln!("Please enter a number between 0 and {max}, or nothing.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_trimmed_line_trims_input() {
        let mut reader = Cursor::new("  8GB  \n");
        assert_eq!(read_trimmed_line(&mut reader).unwrap(), "8GB");
    }

    #[test]
    fn test_read_trimmed_line_accepts_blank_line() {
        // A blank line is valid input (it clears optional selects)
        let mut reader = Cursor::new("\n");
        assert_eq!(read_trimmed_line(&mut reader).unwrap(), "");
    }

    #[test]
    fn test_exhausted_input_is_an_io_error() {
        // A zero-byte read (closed stdin, exhausted pipe) must error so the
        // re-prompt loops in prompt_index terminate instead of spinning
        let mut reader = Cursor::new("");
        let err = read_trimmed_line(&mut reader).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
        assert!(err.to_string().contains("stdin closed"));
    }

    #[test]
    fn test_input_after_last_line_is_an_io_error() {
        let mut reader = Cursor::new("3\n");
        assert_eq!(read_trimmed_line(&mut reader).unwrap(), "3");
        assert!(matches!(
            read_trimmed_line(&mut reader),
            Err(CliError::Io(_))
        ));
    }
}
