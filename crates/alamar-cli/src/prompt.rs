//! Blocking console prompts
//!
//! Generic over the input/output streams so the whole interactive flow can
//! be driven by a scripted buffer in tests.

use std::io::{self, BufRead, Write};

/// Paired input/output streams for sequential blocking prompts
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of output
    pub fn say(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.output, "{msg}")?;
        self.output.flush()
    }

    /// Ask a question and return the trimmed answer
    pub fn ask(&mut self, msg: &str) -> io::Result<String> {
        write!(self.output, "{msg}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Ask a yes/no question; anything other than "yes"/"y" is no
    pub fn ask_yes_no(&mut self, msg: &str) -> io::Result<bool> {
        let answer = self.ask(&format!("{msg} (yes/no): "))?.to_lowercase();
        Ok(answer == "yes" || answer == "y")
    }

    /// Ask for a non-negative count, re-asking until the answer parses
    pub fn ask_count(&mut self, msg: &str) -> io::Result<usize> {
        loop {
            let answer = self.ask(msg)?;
            match answer.parse::<usize>() {
                Ok(n) => return Ok(n),
                Err(_) => self.say(&format!("'{answer}' is not a number, try again."))?,
            }
        }
    }

    /// Get the output stream (for writing larger blocks like tables)
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the console and return the output stream (test transcripts)
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
