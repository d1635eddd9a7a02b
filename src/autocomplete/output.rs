//! Printing of suggestion lists

use std::io::{self, Write};

/// Line printed when a source returns nothing
pub const NO_SUGGESTIONS: &str = "No suggestions found.";

/// Write one suggestion per line, or the empty-result line
pub fn write_suggestions<W: Write>(out: &mut W, suggestions: &[String]) -> io::Result<()> {
    if suggestions.is_empty() {
        writeln!(out, "{}", NO_SUGGESTIONS)?;
        return Ok(());
    }

    for suggestion in suggestions {
        writeln!(out, "{}", suggestion)?;
    }
    Ok(())
}

/// Print suggestions to stdout
pub fn print_suggestions(suggestions: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_suggestions(&mut out, suggestions)?;
    out.flush()
}
