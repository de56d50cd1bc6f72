//! fibtext — Fibonacci calculator and Unicode string toolkit.

use fibtext_cli::{CliPresenter, ResultPresenter};
use fibtext_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(err) = app::run(&config) {
        let presenter = CliPresenter::new(config.format, config.verbose, config.quiet);
        presenter.present_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
