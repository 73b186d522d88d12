//! Terminal prompt primitives
//!
//! Thin wrapper over a line-buffered reader and a writer that asks colored
//! questions and reads single-line answers. The reader and writer are
//! generic so the interactive loop can be driven by scripted input in tests.
//!
//! All feedback shares one interaction stream: prompts in cyan, validation
//! errors in red, confirmations in green. There is no logging framework.

use crate::types::MapperError;
use colored::Colorize;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Prompt for the record name (and quit sentinel)
pub const NAME_PROMPT: &str = "Enter the name of the missing person (or 'q' to quit): ";
/// Prompt for the latitude field
pub const LATITUDE_PROMPT: &str = "Enter the latitude: ";
/// Prompt for the longitude field
pub const LONGITUDE_PROMPT: &str = "Enter the longitude: ";
/// Prompt for the postal code field
pub const POSTAL_CODE_PROMPT: &str = "Enter the postal code: ";
/// Prompt for the place field
pub const PLACE_PROMPT: &str = "Enter the place: ";
/// Prompt for the country field
pub const COUNTRY_PROMPT: &str = "Enter the country: ";

/// Error message shown when a coordinate fails numeric parsing
pub const INVALID_COORDINATES: &str =
    "Invalid latitude or longitude. Please enter numeric values.";

/// Colored question/answer terminal
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<BufReader<Stdin>, Stdout> {
    /// Create a prompter over the process stdin/stdout
    pub fn stdio() -> Self {
        Prompter {
            input: BufReader::new(io::stdin()),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given reader and writer
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Ask a question and read one line of input
    ///
    /// The prompt is shown in cyan without a trailing newline. The answer is
    /// returned with its line terminator stripped; everything else,
    /// including surrounding whitespace, is preserved.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(answer))` - A line was read
    /// * `Ok(None)` - End of input reached
    /// * `Err(MapperError)` - The terminal could not be read or written
    pub fn ask(&mut self, question: &str) -> Result<Option<String>, MapperError> {
        write!(self.output, "{}", question.cyan())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Show a validation error in attention color
    pub fn warn(&mut self, message: &str) -> Result<(), MapperError> {
        writeln!(self.output, "{}", message.red())?;
        Ok(())
    }

    /// Consume the prompter, returning its writer
    ///
    /// Used by tests to inspect what was shown on a captured terminal.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn plain_prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        // Color codes would make output assertions depend on the test
        // environment's terminal detection.
        colored::control::set_override(false);
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_returns_line_without_terminator() {
        let mut prompter = plain_prompter("Jane Doe\n");
        let answer = prompter.ask(NAME_PROMPT).expect("Ask failed");
        assert_eq!(answer, Some("Jane Doe".to_string()));
    }

    #[test]
    fn test_ask_strips_crlf() {
        let mut prompter = plain_prompter("Jane Doe\r\n");
        let answer = prompter.ask(NAME_PROMPT).expect("Ask failed");
        assert_eq!(answer, Some("Jane Doe".to_string()));
    }

    #[test]
    fn test_ask_preserves_inner_whitespace() {
        let mut prompter = plain_prompter("  Jane  Doe  \n");
        let answer = prompter.ask(NAME_PROMPT).expect("Ask failed");
        assert_eq!(answer, Some("  Jane  Doe  ".to_string()));
    }

    #[test]
    fn test_ask_returns_none_at_end_of_input() {
        let mut prompter = plain_prompter("");
        let answer = prompter.ask(NAME_PROMPT).expect("Ask failed");
        assert_eq!(answer, None);
    }

    #[test]
    fn test_ask_writes_prompt_to_output() {
        let mut prompter = plain_prompter("x\n");
        prompter.ask(LATITUDE_PROMPT).expect("Ask failed");

        let output = String::from_utf8(prompter.output).expect("Output not UTF-8");
        assert_eq!(output, LATITUDE_PROMPT);
    }

    #[test]
    fn test_warn_writes_message_line() {
        let mut prompter = plain_prompter("");
        prompter.warn(INVALID_COORDINATES).expect("Warn failed");

        let output = String::from_utf8(prompter.output).expect("Output not UTF-8");
        assert_eq!(output, format!("{}\n", INVALID_COORDINATES));
    }
}
