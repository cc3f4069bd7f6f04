//! Result output for WebChecker
//!
//! Writes the final result lines to stdout or to a file, one per line.

use std::io::Write;
use std::path::Path;

/// Writes result lines to the given file, or to stdout when no file is given
pub fn write_results(results: &[String], output: Option<&Path>) -> std::io::Result<()> {
    match output {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            for line in results {
                writeln!(file, "{}", line)?;
            }
            Ok(())
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            for line in results {
                writeln!(handle, "{}", line)?;
            }
            Ok(())
        }
    }
}
