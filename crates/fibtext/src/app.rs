//! Application entry point and dispatch.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};

use fibtext_cli::output::{format_bytes_hex, format_number, write_to_file};
use fibtext_cli::presenter::{CliPresenter, Report, ResultPresenter};
use fibtext_cli::{ui, OutputFormat};
use fibtext_core::registry::{CalculatorFactory, DefaultFactory};
use fibtext_text::{BackendKind, TextBackend};

use crate::config::{AppConfig, Command};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    tracing::debug!(version = %crate::version::full_version(), "starting");

    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibtext_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let Some(command) = &config.command else {
        <AppConfig as clap::CommandFactory>::command().print_help()?;
        return Ok(());
    };

    let presenter = CliPresenter::new(config.format, config.verbose, config.quiet);
    let ctx = App {
        config,
        presenter: &presenter,
    };

    match command {
        Command::Fib { n, policy } => ctx.run_fib(*n, policy),
        Command::Seq { start, end } => ctx.run_seq(*start, *end),
        Command::Emails { text } => {
            let text = read_text(text.as_deref())?;
            ctx.emit(&Report::new("emails", fibtext_text::extract_emails(&text)))
        }
        Command::ValidateEmail { email } => ctx.emit(
            &Report::new("validate-email", fibtext_text::is_valid_email(email))
                .with_input(email.as_str()),
        ),
        Command::Convert { from, to, input } => {
            let bytes = match input {
                Some(path) => std::fs::read(path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => {
                    let mut buf = Vec::new();
                    io::stdin().read_to_end(&mut buf)?;
                    buf
                }
            };
            ctx.run_convert(&bytes, from, to)
        }
        Command::Translit { list: true, .. } => ctx.list_transliterators(),
        Command::Lower { text }
        | Command::Upper { text }
        | Command::Words { text }
        | Command::Script { text }
        | Command::Translit { text, .. } => {
            let text = read_text(text.as_deref())?;
            ctx.run_text(command, &text)
        }
    }
}

struct App<'a> {
    config: &'a AppConfig,
    presenter: &'a CliPresenter,
}

impl App<'_> {
    fn backend(&self) -> Result<&'static dyn TextBackend> {
        let kind: BackendKind = self.config.backend.parse()?;
        if kind == BackendKind::Ascii {
            tracing::warn!("using the degraded ASCII text backend");
            if !self.config.quiet {
                ui::print_warning("using the degraded ASCII text backend");
            }
        }
        Ok(fibtext_text::backend(kind)?)
    }

    fn run_fib(&self, n: i64, policy: &str) -> Result<()> {
        let factory = DefaultFactory::new();
        let calc = factory.get(policy)?;
        let value = calc.calculate(n)?;
        self.emit(
            &Report::new("fib", value.to_string())
                .with_backend(calc.name())
                .with_input(format_number(n)),
        )
    }

    fn run_seq(&self, start: u64, end: u64) -> Result<()> {
        let lines: Vec<String> = fibtext_core::generate(start, end)?
            .into_iter()
            .map(|(i, value)| format!("F({i}) = {value}"))
            .collect();
        self.emit(&Report::new("seq", lines).with_input(format!("{start}..={end}")))
    }

    fn run_text(&self, command: &Command, text: &str) -> Result<()> {
        let backend = self.backend()?;
        let report = match command {
            Command::Lower { .. } => Report::new("lower", backend.to_lower(text)),
            Command::Upper { .. } => Report::new("upper", backend.to_upper(text)),
            Command::Words { .. } => Report::new("words", backend.count_words(text)),
            Command::Script { .. } => Report::new("script", backend.detect_script(text)),
            Command::Translit { id, .. } => {
                let id = id.as_deref().unwrap_or_default();
                Report::new("translit", backend.transliterate(text, id)?).with_input(id)
            }
            _ => unreachable!("not a text command"),
        };
        self.emit(&report.with_backend(backend.name()))
    }

    fn run_convert(&self, bytes: &[u8], from: &str, to: &str) -> Result<()> {
        let backend = self.backend()?;
        let converted = backend.convert_encoding(bytes, from, to)?;

        if let Some(path) = &self.config.output {
            write_to_file(path, &converted)
                .with_context(|| format!("failed to write {}", path.display()))?;
            if !self.config.quiet {
                ui::print_success(&format!(
                    "wrote {} bytes to {}",
                    converted.len(),
                    path.display()
                ));
            }
            return Ok(());
        }

        match self.config.format {
            OutputFormat::Json => self.emit(
                &Report::new("convert", format_bytes_hex(&converted))
                    .with_backend(backend.name())
                    .with_input(format!("{from} -> {to}")),
            ),
            OutputFormat::Text => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(&converted)?;
                stdout.flush()?;
                Ok(())
            }
        }
    }

    #[cfg(feature = "icu")]
    fn list_transliterators(&self) -> Result<()> {
        if !self.config.quiet && self.config.format == OutputFormat::Text {
            ui::print_header("Transliterators");
        }
        self.emit(&Report::new(
            "translit-list",
            fibtext_text::translit::available_ids(),
        ))
    }

    #[cfg(not(feature = "icu"))]
    fn list_transliterators(&self) -> Result<()> {
        Err(fibtext_text::TextError::Unavailable("transliteration").into())
    }

    /// Present a report on stdout, or write it to the output file.
    fn emit(&self, report: &Report) -> Result<()> {
        let Some(path) = &self.config.output else {
            return Ok(self.presenter.present(report)?);
        };

        let mut buf = Vec::new();
        self.presenter.write_report(report, &mut buf)?;
        write_to_file(path, &buf).with_context(|| format!("failed to write {}", path.display()))?;
        if !self.presenter.is_quiet() {
            ui::print_success(&format!("wrote {} to {}", report.operation, path.display()));
        }
        Ok(())
    }
}

/// Use the argument, or read stdin without its final line break.
fn read_text(arg: Option<&str>) -> Result<String> {
    if let Some(text) = arg {
        return Ok(text.to_string());
    }
    let mut text = io::read_to_string(io::stdin()).context("failed to read stdin")?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
