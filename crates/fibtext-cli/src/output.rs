//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;

/// How reports are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one value per line.
    #[default]
    Text,
    /// Pretty-printed JSON report.
    Json,
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Lowercase hex, two digits per byte, no separators.
#[must_use]
pub fn format_bytes_hex(bytes: &[u8]) -> String {
    use std::fmt::Write as _;

    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        let _ = write!(s, "{b:02x}");
        s
    })
}

/// Write raw bytes to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: impl AsRef<Path>, contents: &[u8]) -> io::Result<()> {
    let mut file = std::fs::File::create(path.as_ref())?;
    file.write_all(contents)?;
    tracing::debug!(path = %path.as_ref().display(), len = contents.len(), "wrote output file");
    Ok(())
}
