//! # fibtext-text
//!
//! Stateless string helpers: locale-aware case mapping, email extraction and
//! validation, transliteration, word counting, script detection and charset
//! conversion.
//!
//! The free functions below run on [`default_backend`]. Callers that need a
//! specific backend or a pinned locale use [`backend`] or construct a
//! backend directly.

pub mod ascii;
pub mod backend;
pub mod email;
pub mod error;

#[cfg(feature = "icu")]
pub mod encoding;
#[cfg(feature = "icu")]
pub mod locale;
#[cfg(feature = "icu")]
pub mod script;
#[cfg(feature = "icu")]
pub mod translit;
#[cfg(feature = "icu")]
pub mod unicode;
#[cfg(feature = "icu")]
pub mod words;

// Re-exports
pub use ascii::AsciiBackend;
pub use backend::{backend, default_backend, BackendKind, TextBackend};
pub use email::{extract_emails, is_valid_email};
pub use error::TextError;

#[cfg(feature = "icu")]
pub use icu_locale_core::LanguageIdentifier;
#[cfg(feature = "icu")]
pub use translit::Transliterator;
#[cfg(feature = "icu")]
pub use unicode::UnicodeBackend;

/// Lowercase using the process default locale.
///
/// # Example
/// ```
/// assert_eq!(fibtext_text::to_lower("CAFÉ"), "café");
/// ```
#[must_use]
pub fn to_lower(input: &str) -> String {
    default_backend().to_lower(input)
}

/// Uppercase using the process default locale.
#[must_use]
pub fn to_upper(input: &str) -> String {
    default_backend().to_upper(input)
}

/// Apply a named transliterator such as `Cyrillic-Latin`.
pub fn transliterate(text: &str, id: &str) -> Result<String, TextError> {
    default_backend().transliterate(text, id)
}

/// Count words: maximal segments containing a letter or digit.
#[must_use]
pub fn count_words(text: &str) -> usize {
    default_backend().count_words(text)
}

/// Name of the most frequent script among alphanumeric characters.
#[must_use]
pub fn detect_script(text: &str) -> String {
    default_backend().detect_script(text)
}

/// Re-encode `bytes` from charset `from` to charset `to`.
pub fn convert_encoding(bytes: &[u8], from: &str, to: &str) -> Result<Vec<u8>, TextError> {
    default_backend().convert_encoding(bytes, from, to)
}
