//! # fibtext-cli
//!
//! CLI output: report rendering in text or JSON, styled messages, and shell
//! completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use output::OutputFormat;
pub use presenter::{CliPresenter, Report, ResultPresenter};
