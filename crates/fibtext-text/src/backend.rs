//! Text backends and their selection.
//!
//! `UnicodeBackend` delegates to the internationalization stack and is the
//! default whenever the `icu` feature is compiled in. `AsciiBackend` is the
//! degraded stand-in for builds without it.

use std::fmt;
use std::str::FromStr;

use crate::ascii::AsciiBackend;
use crate::error::TextError;

#[cfg(feature = "icu")]
use crate::unicode::UnicodeBackend;

/// Operations whose behavior depends on the available text capabilities.
pub trait TextBackend: Send + Sync {
    /// Backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Which kind of backend this is.
    fn kind(&self) -> BackendKind;

    /// Lowercase with the backend's locale rules.
    fn to_lower(&self, input: &str) -> String;

    /// Uppercase with the backend's locale rules.
    fn to_upper(&self, input: &str) -> String;

    /// Apply a named transliterator.
    fn transliterate(&self, text: &str, id: &str) -> Result<String, TextError>;

    /// Count word-like segments.
    fn count_words(&self, text: &str) -> usize;

    /// Name of the dominant script.
    fn detect_script(&self, text: &str) -> String;

    /// Re-encode bytes between named charsets.
    fn convert_encoding(&self, bytes: &[u8], from: &str, to: &str)
        -> Result<Vec<u8>, TextError>;
}

/// Available backend kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Full Unicode and locale support.
    Unicode,
    /// Degraded ASCII heuristics.
    Ascii,
}

impl BackendKind {
    /// The best backend this build supports.
    #[must_use]
    pub fn detect() -> Self {
        if cfg!(feature = "icu") {
            Self::Unicode
        } else {
            Self::Ascii
        }
    }

    /// Canonical name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Unicode => "unicode",
            Self::Ascii => "ascii",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendKind {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" | "icu" | "full" => Ok(Self::Unicode),
            "ascii" | "degraded" | "fallback" => Ok(Self::Ascii),
            "auto" => Ok(Self::detect()),
            _ => Err(TextError::UnknownBackend(s.to_string())),
        }
    }
}

static ASCII: AsciiBackend = AsciiBackend;

#[cfg(feature = "icu")]
static UNICODE: UnicodeBackend = UnicodeBackend::new();

/// Get the backend of a given kind, if this build has it.
pub fn backend(kind: BackendKind) -> Result<&'static dyn TextBackend, TextError> {
    tracing::debug!(backend = %kind, "selecting text backend");
    match kind {
        BackendKind::Ascii => Ok(&ASCII),
        #[cfg(feature = "icu")]
        BackendKind::Unicode => Ok(&UNICODE),
        #[cfg(not(feature = "icu"))]
        BackendKind::Unicode => Err(TextError::UnknownBackend(kind.name().to_string())),
    }
}

/// The backend picked by [`BackendKind::detect`].
#[must_use]
pub fn default_backend() -> &'static dyn TextBackend {
    backend(BackendKind::detect()).unwrap_or(&ASCII)
}
