// User-facing diagnostics printed outside the dashboard

use colored::Colorize;
use std::io::{self, Write};

/// Prefix of every diagnostic line
pub const TAG: &str = "[treetop]";

/// Write a warning line to `out`
pub fn write_warning<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("{}[warning] {}", TAG, message).yellow().bold())
}
