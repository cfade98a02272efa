//! Line-oriented prompting over any reader/writer pair.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Writes prompts and reads single-line answers.
///
/// Generic over the streams so sessions can be scripted in tests with a
/// `Cursor` and a `Vec<u8>`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line.
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Print `prompt` and read one line without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD, so a malformed line is
    /// just another answer to reject. Returns `None` once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like [`Prompter::ask`] but trims surrounding whitespace.
    pub fn ask_trimmed(&mut self, prompt: &str) -> io::Result<Option<String>> {
        Ok(self.ask(prompt)?.map(|answer| answer.trim().to_string()))
    }

    /// Ask a yes/no question; only `y` (any case) counts as yes.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self
            .ask_trimmed(prompt)?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("y")))
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
