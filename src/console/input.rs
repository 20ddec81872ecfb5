//! Validated console input.
//!
//! [`Prompter`] reads lines from any [`BufRead`] and writes prompts and
//! error messages to any [`Write`], re-prompting until the input is valid.
//! End of input is reported as an `Io` error of kind `UnexpectedEof`.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};

/// Prompts for and validates user input.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given input and output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output stream.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompter and returns its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_trimmed(&mut self, prompt: &str) -> PayrollResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PayrollError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        Ok(line.trim().to_string())
    }

    fn complain(&mut self, message: &str) -> PayrollResult<()> {
        writeln!(self.output, "Error: {}", message)?;
        Ok(())
    }

    /// Reads a trimmed, non-empty string.
    pub fn read_non_empty(&mut self, prompt: &str) -> PayrollResult<String> {
        loop {
            let value = self.read_trimmed(prompt)?;
            if !value.is_empty() {
                return Ok(value);
            }
            self.complain("the field must not be empty. Try again.")?;
        }
    }

    /// Reads a decimal in `(0, max]`.
    pub fn read_positive_decimal(&mut self, prompt: &str, max: Decimal) -> PayrollResult<Decimal> {
        loop {
            let line = self.read_trimmed(prompt)?;
            let Ok(value) = Decimal::from_str(&line) else {
                self.complain("enter a number.")?;
                continue;
            };
            if value <= Decimal::ZERO {
                self.complain("the value must be greater than 0. Try again.")?;
            } else if value > max {
                self.complain(&format!("the value must not exceed {}. Try again.", max))?;
            } else {
                return Ok(value);
            }
        }
    }

    /// Reads a whole number in `[1, max]`. Only digits are accepted.
    pub fn read_positive_int_limited(&mut self, prompt: &str, max: u32) -> PayrollResult<u32> {
        loop {
            let line = self.read_trimmed(prompt)?;
            if line.is_empty() {
                self.complain("the field must not be empty. Try again.")?;
                continue;
            }
            let Some(value) = parse_digits(&line) else {
                self.complain("enter a whole number.")?;
                continue;
            };
            if value == 0 {
                self.complain("the value must be greater than 0. Try again.")?;
            } else if value > u64::from(max) {
                self.complain(&format!("the value must not exceed {}. Try again.", max))?;
            } else {
                return Ok(value as u32);
            }
        }
    }

    /// Reads a whole number in `[low, high]`. Only digits are accepted.
    pub fn read_int_in_range(&mut self, prompt: &str, low: u32, high: u32) -> PayrollResult<u32> {
        loop {
            let line = self.read_trimmed(prompt)?;
            if line.is_empty() {
                self.complain("the field must not be empty.")?;
                continue;
            }
            match parse_digits(&line) {
                Some(value) if value >= u64::from(low) && value <= u64::from(high) => {
                    return Ok(value as u32);
                }
                Some(_) => self.complain(&format!(
                    "the number is outside the range [{}, {}].",
                    low, high
                ))?,
                None => self.complain("enter a whole number.")?,
            }
        }
    }
}

/// Parses an unsigned integer made only of ASCII digits. Values that do
/// not fit in `u64` are treated as out of range rather than invalid.
fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(s.parse::<u64>().unwrap_or(u64::MAX))
}
