use std::io::{self, BufRead, IsTerminal, Write};

use crate::{prelude::*, quantity::cups::Cups};

const PROMPT: &str = "Enter number of cups: ";

/// Ask for the number of cups on the standard input.
///
/// The prompt is only shown when somebody is actually typing.
#[instrument(skip_all)]
pub fn prompt_cups() -> Result<Cups> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let mut stdout = io::stdout().lock();
        stdout.write_all(PROMPT.as_bytes()).context("failed to show the prompt")?;
        stdout.flush().context("failed to flush the prompt")?;
    }
    read_cups(stdin.lock())
}

/// Read the first whitespace-delimited token and parse its leading integer.
///
/// Missing or unparseable input, including bytes that are not UTF-8, counts as zero cups.
pub fn read_cups(mut reader: impl BufRead) -> Result<Cups> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).context("failed to read the number of cups")? == 0 {
            warn!("no input, assuming zero cups");
            return Ok(Cups::zero());
        }
        if let Some(token) = String::from_utf8_lossy(&line).split_whitespace().next() {
            return Ok(parse_token(token));
        }
    }
}

fn parse_token(token: &str) -> Cups {
    let (Some(value), consumed) = leading_integer(token) else {
        warn!(token, "not a number, assuming zero cups");
        return Cups::zero();
    };
    if consumed < token.len() {
        warn!(token, trailing = &token[consumed..], "ignoring the trailing characters");
    }
    debug!(value, "parsed");
    Cups(value)
}

/// Parse an optionally signed run of ASCII digits at the start of the token.
///
/// Also returns the length of the run in bytes.
fn leading_integer(token: &str) -> (Option<i64>, usize) {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    let sign_len = token.len() - unsigned.len();
    let digits_len = unsigned.find(|c: char| !c.is_ascii_digit()).unwrap_or(unsigned.len());
    let end = sign_len + digits_len;
    (token[..end].parse().ok(), end)
}
