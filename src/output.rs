use std::io::Write;

use crate::error::{Error, Result};

/// Writes the body exactly as received, then a single newline.
pub fn print_body<W: Write>(out: &mut W, body: &[u8]) -> Result<()> {
    out.write_all(body).map_err(Error::Output)?;
    out.write_all(b"\n").map_err(Error::Output)?;
    out.flush().map_err(Error::Output)
}

/// Writes the diagnostic line for `err` and returns the status to exit with.
pub fn report<W: Write>(out: &mut W, err: &Error) -> i32 {
    // Nothing left to report to if the error stream itself is gone.
    let _ = writeln!(out, "eip: {}", err);
    err.exit_code()
}
