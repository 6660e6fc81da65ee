//! Terminal input for the calculator binaries.

use std::io::{BufRead, Write};

use crate::errors::SimulationError;

/// Prompts until a line parses as a number. EOF is an error.
pub fn read_f64<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<f64, SimulationError> {
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(SimulationError::InputEnded);
        }

        match line.trim().parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(
                output,
                "Please enter a valid number (e.g., 45 or 12.5)."
            )?,
        }
    }
}

/// Uses `value` when it was given on the command line, otherwise asks for it.
pub fn value_or_prompt<R: BufRead, W: Write>(
    value: Option<f64>,
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<f64, SimulationError> {
    match value {
        Some(value) => Ok(value),
        None => read_f64(input, output, prompt),
    }
}
