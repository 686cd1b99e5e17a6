//! Interactive console helpers

use std::io::{self, BufRead, Write};

use tracing::debug;

pub const PAUSE_PROMPT: &str = "Press Enter to exit...";

/// Write `prompt` to `output` and block until a line (or EOF) arrives on `input`.
pub fn wait_for_enter<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<()> {
    write!(output, "{} ", prompt)?;
    output.flush()?;
    let mut buf = String::new();
    let read = input.read_line(&mut buf)?;
    debug!(bytes = read, "pause released");
    Ok(())
}

/// [`wait_for_enter`] on the process's stdin/stdout.
pub fn pause() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    wait_for_enter(&mut input, &mut output, PAUSE_PROMPT)
}
