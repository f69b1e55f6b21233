//! Output formatting for the dependency list and informational text.

use std::io::{self, Write};

use downstream_prs::IntakeError;

/// Writes each dependency URL on its own line to stdout.
pub fn write_dependencies(dependencies: &[String]) -> Result<(), IntakeError> {
    let mut stdout = io::stdout().lock();
    write_dependencies_to(&mut stdout, dependencies)
}

/// Writes each dependency URL on its own line to the given writer.
pub fn write_dependencies_to<W: Write>(
    writer: &mut W,
    dependencies: &[String],
) -> Result<(), IntakeError> {
    for dependency in dependencies {
        writeln!(writer, "{dependency}").map_err(|e| io_error(&e))?;
    }
    writer.flush().map_err(|e| io_error(&e))
}

/// Writes help or version text to stdout.
pub fn write_text(text: &str) -> Result<(), IntakeError> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| io_error(&e))
}

fn io_error(error: &io::Error) -> IntakeError {
    IntakeError::Io {
        message: error.to_string(),
    }
}
