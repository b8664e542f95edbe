//! Line-oriented terminal prompts
//!
//! Wraps an input reader and an output writer so the interactive commands can
//! be driven by stdin/stdout in the binary and by in-memory buffers in tests.

use std::io::{BufRead, Write};

use crate::error::GreeterResult;

/// Prompts on `output` and reads answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a new prompter
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` without a newline and read one line of input
    ///
    /// Returns `None` once input is exhausted. The trailing line terminator is
    /// stripped; other whitespace is left for the caller.
    pub fn ask(&mut self, prompt: &str) -> GreeterResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Print one line
    pub fn say(&mut self, line: &str) -> GreeterResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Consume the prompter, returning the output writer
    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_writes_prompt_and_reads_line() {
        let mut prompter = Prompter::new(Cursor::new("Ada\n"), Vec::new());
        let answer = prompter.ask("Name? ").unwrap();

        assert_eq!(answer.as_deref(), Some("Ada"));
        assert_eq!(prompter.into_output(), b"Name? ");
    }

    #[test]
    fn test_ask_strips_crlf_only() {
        let mut prompter = Prompter::new(Cursor::new("  spaced  \r\n"), Vec::new());
        assert_eq!(prompter.ask("").unwrap().as_deref(), Some("  spaced  "));
    }

    #[test]
    fn test_ask_last_line_without_newline() {
        let mut prompter = Prompter::new(Cursor::new("42"), Vec::new());
        assert_eq!(prompter.ask("").unwrap().as_deref(), Some("42"));
        assert_eq!(prompter.ask("").unwrap(), None);
    }

    #[test]
    fn test_ask_at_end_of_input() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        assert_eq!(prompter.ask("Age? ").unwrap(), None);
    }

    #[test]
    fn test_say_appends_newline() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        prompter.say("done").unwrap();
        assert_eq!(prompter.into_output(), b"done\n");
    }
}
