//! Version information.

use fibtext_text::BackendKind;

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version plus the text backend compiled into this build.
#[must_use]
pub fn full_version() -> String {
    format!("fibtext {} ({} text backend)", version(), BackendKind::detect())
}
