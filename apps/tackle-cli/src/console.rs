//! # Console
//!
//! Prompting over any `BufRead` + `Write` pair, so the whole menu can be
//! driven from a `Cursor` in tests and from locked stdin/stdout in `main`.
//!
//! ## Re-prompt Loop
//! ```text
//! ask("Phone number: ", validate_phone)
//!      │
//!      ▼
//!  write prompt ──► read line ──► EOF? ──────────────► Ok(None)
//!      ▲                │
//!      │                ▼
//!      │           parse(line)
//!      │            │       │
//!      └── print ◄─ Err     Ok(v) ─────────────────► Ok(Some(v))
//!          message
//! ```

use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::trace;

use crate::error::AppResult;

/// Line-oriented prompt helper.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> AppResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes `text` exactly as given.
    pub fn print(&mut self, text: impl Display) -> AppResult<()> {
        write!(self.output, "{text}")?;
        Ok(())
    }

    /// Shows `prompt` and reads one line without its line ending.
    ///
    /// Returns `None` once the input is exhausted. Bytes that are not valid
    /// UTF-8 become U+FFFD and are left for the field's parser to reject.
    pub fn read_line(&mut self, prompt: &str) -> AppResult<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            trace!(prompt, "input closed");
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Asks until `parse` accepts the answer, printing each rejection.
    ///
    /// Returns `None` if the input ends first.
    pub fn ask<T, E: Display>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> AppResult<Option<T>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.say(e)?,
            }
        }
    }

    /// Gives back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tackle_core::validation::parse_nights;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(c: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(c.into_output()).unwrap()
    }

    #[test]
    fn test_read_line_strips_line_ending() {
        let mut c = console("hello\r\nworld");
        assert_eq!(c.read_line("> ").unwrap().as_deref(), Some("hello"));
        assert_eq!(c.read_line("> ").unwrap().as_deref(), Some("world"));
        assert_eq!(c.read_line("> ").unwrap(), None);
        assert_eq!(output(c), "> > > ");
    }

    #[test]
    fn test_ask_reprompts_until_valid() {
        let mut c = console("zero\n0\n3\n");
        assert_eq!(c.ask("Nights: ", parse_nights).unwrap(), Some(3));

        let out = output(c);
        assert_eq!(out.matches("Nights: ").count(), 3);
        assert!(out.contains("Number of nights must be a whole number (got 'zero')"));
        assert!(out.contains("Number of nights must be at least 1 (got 0)"));
    }

    #[test]
    fn test_read_line_survives_invalid_utf8() {
        let mut c = Console::new(Cursor::new(b"caf\xE9\n2\n".to_vec()), Vec::new());
        assert_eq!(c.read_line("> ").unwrap().as_deref(), Some("caf\u{FFFD}"));
        assert_eq!(c.read_line("> ").unwrap().as_deref(), Some("2"));
        assert_eq!(c.read_line("> ").unwrap(), None);
    }

    #[test]
    fn test_ask_returns_none_on_eof() {
        let mut c = console("bad\n");
        assert_eq!(c.ask("Nights: ", parse_nights).unwrap(), None);
    }
}
