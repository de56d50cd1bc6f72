//! Degraded backend for builds without the internationalization stack.
//!
//! Case mapping falls back to the standard library's default Unicode mapping
//! (no locale tailoring). Word counting and script detection use ASCII
//! heuristics. Transliteration and cross-charset conversion fail with
//! [`TextError::Unavailable`] instead of pretending to succeed.

use crate::backend::{BackendKind, TextBackend};
use crate::error::TextError;

/// ASCII heuristic backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiBackend;

impl TextBackend for AsciiBackend {
    fn name(&self) -> &'static str {
        "ascii"
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Ascii
    }

    fn to_lower(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn to_upper(&self, input: &str) -> String {
        input.to_uppercase()
    }

    fn transliterate(&self, _text: &str, _id: &str) -> Result<String, TextError> {
        Err(TextError::Unavailable("transliteration"))
    }

    fn count_words(&self, text: &str) -> usize {
        let mut count = 0;
        let mut in_word = false;
        for b in text.bytes() {
            let is_word_byte = b.is_ascii_alphanumeric();
            if is_word_byte && !in_word {
                count += 1;
            }
            in_word = is_word_byte;
        }
        count
    }

    fn detect_script(&self, text: &str) -> String {
        let ascii = text.bytes().filter(u8::is_ascii).count();
        let non_ascii = text.len() - ascii;
        if ascii >= non_ascii { "Latin" } else { "Unknown" }.to_string()
    }

    fn convert_encoding(
        &self,
        bytes: &[u8],
        from: &str,
        to: &str,
    ) -> Result<Vec<u8>, TextError> {
        if from.trim().eq_ignore_ascii_case(to.trim()) {
            Ok(bytes.to_vec())
        } else {
            Err(TextError::Unavailable("encoding conversion"))
        }
    }
}
