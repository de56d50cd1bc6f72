//! fibtext library — application logic for the `fibtext` command.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
