//! Full backend over ICU4X, UAX #29 segmentation and `encoding_rs`.

use icu_casemap::CaseMapper;
use icu_locale_core::LanguageIdentifier;

use crate::backend::{BackendKind, TextBackend};
use crate::error::TextError;
use crate::translit::Transliterator;
use crate::{encoding, locale, script, words};

/// Unicode backend with locale-aware case mapping.
///
/// Without an explicit locale, case mapping follows the process default
/// locale as it is at the time of each call.
#[derive(Debug, Clone, Default)]
pub struct UnicodeBackend {
    locale: Option<LanguageIdentifier>,
}

impl UnicodeBackend {
    /// Backend following the process default locale.
    #[must_use]
    pub const fn new() -> Self {
        Self { locale: None }
    }

    /// Backend pinned to a locale, e.g. `tr` for Turkish dotted/dotless i.
    #[must_use]
    pub fn with_locale(locale: LanguageIdentifier) -> Self {
        Self {
            locale: Some(locale),
        }
    }

    /// The locale case mapping will use.
    #[must_use]
    pub fn locale(&self) -> LanguageIdentifier {
        self.locale.clone().unwrap_or_else(locale::default_langid)
    }
}

impl TextBackend for UnicodeBackend {
    fn name(&self) -> &'static str {
        "unicode"
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Unicode
    }

    fn to_lower(&self, input: &str) -> String {
        String::from(CaseMapper::new().lowercase_to_string(input, &self.locale()))
    }

    fn to_upper(&self, input: &str) -> String {
        String::from(CaseMapper::new().uppercase_to_string(input, &self.locale()))
    }

    fn transliterate(&self, text: &str, id: &str) -> Result<String, TextError> {
        Ok(Transliterator::new(id)?.transliterate(text))
    }

    fn count_words(&self, text: &str) -> usize {
        words::count_words(text)
    }

    fn detect_script(&self, text: &str) -> String {
        script::script_name(script::dominant_script(text))
    }

    fn convert_encoding(
        &self,
        bytes: &[u8],
        from: &str,
        to: &str,
    ) -> Result<Vec<u8>, TextError> {
        encoding::convert(bytes, from, to)
    }
}
