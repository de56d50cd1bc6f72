//! CLI result presenter.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::Value;

use crate::output::OutputFormat;

/// Outcome of one operation, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Operation name, e.g. `fib` or `emails`.
    pub operation: String,
    /// Text backend or calculator that produced the result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
    /// Short description of the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// The result value.
    pub result: Value,
}

impl Report {
    #[must_use]
    pub fn new(operation: impl Into<String>, result: impl Into<Value>) -> Self {
        Self {
            operation: operation.into(),
            backend: None,
            input: None,
            result: result.into(),
        }
    }

    #[must_use]
    pub fn with_backend(mut self, backend: impl Into<String>) -> Self {
        self.backend = Some(backend.into());
        self
    }

    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }
}

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Render a report to the given writer.
    fn write_report(&self, report: &Report, out: &mut dyn Write) -> io::Result<()>;

    /// Present a report on stdout.
    fn present(&self, report: &Report) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_report(report, &mut lock)
    }

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// CLI result presenter.
pub struct CliPresenter {
    format: OutputFormat,
    verbose: bool,
    quiet: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(format: OutputFormat, verbose: bool, quiet: bool) -> Self {
        Self {
            format,
            verbose,
            quiet,
        }
    }

    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    fn write_text(&self, report: &Report, out: &mut dyn Write) -> io::Result<()> {
        if self.verbose && !self.quiet {
            writeln!(out, "Operation: {}", report.operation)?;
            if let Some(backend) = &report.backend {
                writeln!(out, "Backend: {backend}")?;
            }
            if let Some(input) = &report.input {
                writeln!(out, "Input: {input}")?;
            }
        }

        match &report.result {
            Value::Array(items) => {
                for item in items {
                    writeln!(out, "{}", plain(item))?;
                }
                Ok(())
            }
            other => writeln!(out, "{}", plain(other)),
        }
    }
}

/// Strings without JSON quoting, everything else as JSON.
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl ResultPresenter for CliPresenter {
    fn write_report(&self, report: &Report, out: &mut dyn Write) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => self.write_text(report, out),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, report)?;
                writeln!(out)
            }
        }
    }

    fn present_error(&self, error: &str) {
        crate::ui::print_error(error);
    }
}
