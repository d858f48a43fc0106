pub mod formatters;
pub mod views;

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// Pretty JSON on stdout, newline-terminated
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
