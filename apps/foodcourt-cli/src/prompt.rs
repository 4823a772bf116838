//! # Prompt
//!
//! Line-based console I/O over any `BufRead` + `Write` pair, so sessions run
//! the same against a terminal or a scripted buffer.

use std::io::{BufRead, Write};

use crate::error::{AppError, AppResult};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Gives back the output, e.g. to inspect a scripted session.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints a line.
    pub fn say(&mut self, text: impl AsRef<str>) -> AppResult<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Prints `label` without a newline and reads one trimmed line.
    ///
    /// ## Errors
    /// `InputClosed` at end of input.
    pub fn ask(&mut self, label: &str) -> AppResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Reads an integer.
    ///
    /// ## Errors
    /// `InvalidChoice` if the line is not a number; `expected` is shown to the
    /// user.
    pub fn ask_number(&mut self, label: &str, expected: &str) -> AppResult<i64> {
        let raw = self.ask(label)?;
        raw.parse()
            .map_err(|_| AppError::invalid_choice(raw, expected))
    }

    /// Yes/no question; anything starting with `y` or `Y` is yes.
    pub fn confirm(&mut self, label: &str) -> AppResult<bool> {
        let raw = self.ask(label)?;
        Ok(raw.starts_with(['y', 'Y']))
    }

    /// "Press Enter to continue..." pause. End of input is not an error here.
    pub fn pause(&mut self) -> AppResult<()> {
        match self.ask("Press Enter to continue...") {
            Ok(_) | Err(AppError::InputClosed) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
