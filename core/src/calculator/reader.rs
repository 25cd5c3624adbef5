use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tally_common::error::InputError;
use tally_common::finance::Field;
use tally_common::input::{NumberSource, ensure_positive};

/// Reads whitespace-separated numbers from a line-oriented reader.
///
/// The field's prompt goes to `prompt` before every read. Several numbers on
/// one line are handed out one per [`NumberSource::acquire`] call.
pub struct TokenReader<R, W> {
    reader: R,
    prompt: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> TokenReader<R, W> {
    pub fn new(reader: R, prompt: W) -> Self {
        Self {
            reader,
            prompt,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn show_prompt(&mut self, field: Field) -> std::io::Result<()> {
        self.prompt.write_all(field.prompt().as_bytes())?;
        self.prompt.flush()
    }
}

impl<R: BufRead, W: Write> NumberSource for TokenReader<R, W> {
    fn acquire(&mut self, field: Field) -> Result<f64, InputError> {
        self.show_prompt(field)
            .map_err(|source| InputError::Io { field, source })?;

        let token = self
            .next_token()
            .map_err(|source| InputError::Io { field, source })?
            .ok_or(InputError::EndOfInput { field })?;

        let value = match token.parse::<f64>() {
            Ok(value) if f64::is_finite(value) => value,
            _ => return Err(InputError::InvalidNumber { field, token }),
        };

        ensure_positive(field, value)
    }
}
