use colored::*;
use std::io::{self, Write};

/// Write the assistant reply followed by a newline
pub fn display_reply<W: Write>(out: &mut W, reply: &str) -> io::Result<()> {
    writeln!(out, "{}", reply)?;
    out.flush()
}

/// Dimmed diagnostic line on stderr, only when verbose
pub fn log_verbose(verbose: bool, message: &str) {
    if verbose {
        eprintln!("{}", format!("[masterchef] {}", message).dimmed());
    }
}
